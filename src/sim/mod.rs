//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Injected randomness only
//! - Stable brick iteration order (column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{circle_rect_overlap, exits_horizontally, hits_ceiling, within_span};
pub use levels::{LevelOverflow, LevelParams, StartPose};
pub use rng::{DirectionSource, FixedDirection};
pub use state::{Ball, Brick, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{FrameEvent, FrameInput, FrameResult, GameSimulation};
