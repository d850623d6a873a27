use glam::IVec2;

use crate::{GameRng, Params};

/// Paddle component - one per player
///
/// `x` is fixed for the whole match; only `y` moves, and only through the
/// paddle-update step.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    pub fn new(x: i32) -> Self {
        Self {
            x,
            y: Params::PADDLE_START_Y,
        }
    }

    /// Bottom edge of the paddle.
    pub fn bottom(&self) -> i32 {
        self.y + Params::PADDLE_HEIGHT
    }
}

/// Ball component - integer position and velocity, one step per tick
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Reposition for a serve after a goal, with random vertical jitter.
    pub fn serve(&mut self, x: i32, vel: IVec2, rng: &mut GameRng) {
        use rand::Rng;
        let y = Params::SERVE_Y_BASE + rng.0.gen_range(0..Params::SERVE_Y_JITTER);
        self.pos = IVec2::new(x, y);
        self.vel = vel;
    }
}
