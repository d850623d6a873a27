use crate::{Ball, ControlState, Paddle, Params};

/// Nudge both paddles one step from the sampled control flags
///
/// Up and down are applied independently for each paddle; when both keys for
/// one paddle are held, both branches run (down second), matching the
/// classic ruleset. The step guards keep the paddle strictly inside the
/// play area.
pub fn move_paddles(left: &mut Paddle, right: &mut Paddle, controls: ControlState) {
    nudge(right, controls.right_up, controls.right_down);
    nudge(left, controls.left_up, controls.left_down);
}

fn nudge(paddle: &mut Paddle, up: bool, down: bool) {
    if up && paddle.y > Params::PLAY_TOP + Params::PADDLE_STEP {
        paddle.y -= Params::PADDLE_STEP;
    }
    if down && paddle.bottom() < Params::PLAY_BOTTOM - Params::PADDLE_STEP {
        paddle.y += Params::PADDLE_STEP;
    }
}

/// Advance the ball one step along its velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
