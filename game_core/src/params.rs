use glam::IVec2;
use std::time::Duration;

/// Court geometry and motion constants for classic Pong
///
/// The court is fixed at 500x350 with paddles and ball confined to the
/// vertical band between `PLAY_TOP` and `PLAY_BOTTOM`.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const FIELD_WIDTH: i32 = 500;
    pub const FIELD_HEIGHT: i32 = 350;
    pub const PLAY_TOP: i32 = 20;
    pub const PLAY_BOTTOM: i32 = 280;

    // Paddles
    pub const PADDLE_HEIGHT: i32 = 30;
    pub const PADDLE_HALF_WIDTH: i32 = 4;
    pub const PADDLE_STEP: i32 = 4;
    pub const LEFT_PADDLE_X: i32 = 50;
    pub const RIGHT_PADDLE_X: i32 = 450;
    pub const PADDLE_START_Y: i32 = 50;

    // Ball
    pub const BALL_RADIUS: i32 = 10;
    pub const BALL_START_POS: IVec2 = IVec2::new(70, 70);
    pub const BALL_START_VEL: IVec2 = IVec2::new(7, 3);

    // Scoring and serve. A goal counts once the ball crosses the margin
    // behind either paddle; the serve restarts play from the scorer's side,
    // aimed back at the player who conceded.
    pub const GOAL_MARGIN: i32 = 20;
    pub const SERVE_X_LEFT: i32 = 70;
    pub const SERVE_X_RIGHT: i32 = 430;
    pub const SERVE_VEL_LEFTWARD: IVec2 = IVec2::new(-7, 4);
    pub const SERVE_VEL_RIGHTWARD: IVec2 = IVec2::new(7, 4);
    pub const SERVE_Y_BASE: i32 = 70;
    pub const SERVE_Y_JITTER: i32 = 20;

    // Paddle deflection window: horizontal overlap threshold and the
    // asymmetric vertical window around the paddle's top edge.
    pub const HIT_RANGE_X: i32 = 14;
    pub const HIT_WINDOW_ABOVE: i32 = 10;
    pub const HIT_WINDOW_BELOW: i32 = 40;

    // Loop
    pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
}
