use crate::{Ball, Events, GameRng, Params, Score};

/// Check whether the ball slipped past a paddle and serve again if so
///
/// Both goal lines are checked unconditionally each tick, left then right;
/// if a pathological velocity ever satisfied both, the right-exit reset
/// would overwrite the left-exit one. Kept for compatibility with the
/// classic ruleset.
pub fn check_scoring(ball: &mut Ball, score: &mut Score, events: &mut Events, rng: &mut GameRng) {
    if ball.pos.x < Params::GOAL_MARGIN {
        score.increment_right();
        events.right_scored = true;
        ball.serve(Params::SERVE_X_RIGHT, Params::SERVE_VEL_LEFTWARD, rng);
    }
    if ball.pos.x > Params::FIELD_WIDTH - Params::GOAL_MARGIN {
        score.increment_left();
        events.left_scored = true;
        ball.serve(Params::SERVE_X_LEFT, Params::SERVE_VEL_RIGHTWARD, rng);
    }
}
