//! Canvas rendering module
//!
//! `scene` turns simulation state into plain draw commands; `canvas2d`
//! replays them on a browser 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod scene;

pub use scene::{DrawCommand, build_scene};
