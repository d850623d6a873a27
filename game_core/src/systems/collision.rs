use crate::{Ball, Events, Paddle, Params};

/// Bounce the ball off the top and bottom of the play area
///
/// The two edge checks are independent and can both fire in one tick,
/// double-negating the velocity. The bound is soft: the ball may sit one
/// step past an edge before the reversal takes effect. Both quirks are kept
/// for compatibility with the classic ruleset.
pub fn bounce_walls(ball: &mut Ball, events: &mut Events) {
    if ball.pos.y - Params::BALL_RADIUS < Params::PLAY_TOP {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + Params::BALL_RADIUS > Params::PLAY_BOTTOM {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reverse the ball's horizontal motion when it overlaps a paddle
///
/// Both paddles are checked unconditionally; a ball somehow overlapping both
/// gets a double negation, which is a no-op.
pub fn deflect_off_paddles(left: &Paddle, right: &Paddle, ball: &mut Ball, events: &mut Events) {
    deflect(right, ball, events);
    deflect(left, ball, events);
}

fn deflect(paddle: &Paddle, ball: &mut Ball, events: &mut Events) {
    let overlap_x = (paddle.x - ball.pos.x).abs() < Params::HIT_RANGE_X;
    let overlap_y = ball.pos.y > paddle.y - Params::HIT_WINDOW_ABOVE
        && ball.pos.y < paddle.y + Params::HIT_WINDOW_BELOW;
    if overlap_x && overlap_y {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_paddle = true;
    }
}
