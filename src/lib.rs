//! Brickwall - a classic single-screen Breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, game state)
//! - `renderer`: Frame composition over a minimal draw-surface abstraction

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (100 Hz)
    pub const TICK_DT: f32 = 1.0 / 100.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle travel per tick when a key is held (pixels)
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Initial ball velocity (pixels per tick)
    pub const BALL_START_VEL: (f32, f32) = (2.0, -2.0);

    /// Brick field defaults
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Points awarded per destroyed brick
    pub const POINTS_PER_BRICK: u32 = 10;

    /// Fill color shared by ball, paddle, bricks and score text
    pub const ENTITY_COLOR: &str = "#0095DD";
}

/// Mirror a coordinate about a boundary (instantaneous reflection, no clipping)
#[inline]
pub fn mirror_about(value: f32, boundary: f32) -> f32 {
    2.0 * boundary - value
}
