pub mod components;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Complete state of one Pong match
///
/// Entities are created once and live until the match ends; a goal resets
/// the ball in place, never the scores or paddles.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(Params::LEFT_PADDLE_X),
            right_paddle: Paddle::new(Params::RIGHT_PADDLE_X),
            ball: Ball::new(Params::BALL_START_POS, Params::BALL_START_VEL),
            score: Score::new(),
        }
    }

    /// Move both paddles one step from the sampled control flags.
    pub fn update_paddles(&mut self, controls: ControlState) {
        move_paddles(&mut self.left_paddle, &mut self.right_paddle, controls);
    }

    /// Advance the ball one step: motion, goals, wall bounces, deflections.
    ///
    /// Goal checks run before the bounce and deflection checks, matching the
    /// classic ruleset's ordering.
    pub fn update_ball(&mut self, rng: &mut GameRng, events: &mut Events) {
        move_ball(&mut self.ball);
        check_scoring(&mut self.ball, &mut self.score, events, rng);
        bounce_walls(&mut self.ball, events);
        deflect_off_paddles(
            &self.left_paddle,
            &self.right_paddle,
            &mut self.ball,
            events,
        );
    }

    /// Run one full simulation tick: paddles first, then the ball.
    pub fn tick(&mut self, controls: ControlState, rng: &mut GameRng, events: &mut Events) {
        self.update_paddles(controls);
        self.update_ball(rng, events);
    }

    /// Self-consistent copy of everything the renderer needs.
    pub fn snapshot(&self, tick: u32) -> Snapshot {
        Snapshot {
            tick,
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            paddle_left_y: self.left_paddle.y,
            paddle_right_y: self.right_paddle.y,
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
