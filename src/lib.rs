//! Canvas Breakout - a classic brick breaker on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, levels, lives)
//! - `config`: Data-driven game geometry and level table
//! - `platform`: Browser input abstraction
//! - `renderer`: Projection of simulation state into canvas draw calls

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{FrameEvent, FrameInput, FrameResult, GameSimulation};

/// Default game constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Paddle step per frame, as a fraction of paddle width
    pub const PADDLE_STEP_FRACTION: f32 = 0.1;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_WIDTH: f32 = 78.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_PADDING: f32 = 12.0;
    /// Vertical gap between rows is padding * this factor
    pub const BRICK_ROW_PADDING_FACTOR: f32 = 1.25;
    pub const BRICK_OFFSET_TOP: f32 = 35.0;
    pub const BRICK_OFFSET_LEFT: f32 = 26.0;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;

    /// Per-level progression
    pub const PADDLE_OFFSET_PER_LEVEL: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 2.0;
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.5;

    /// One colour per level
    pub const LEVEL_PALETTE: [&str; 6] = [
        "#51d0de", "#9bc400", "#ffde22", "#ff6f3c", "#eb2632", "#27296d",
    ];
}
