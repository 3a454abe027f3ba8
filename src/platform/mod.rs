//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input (held-key tracking)

pub mod input;

pub use input::{Direction, KeyTracker};
