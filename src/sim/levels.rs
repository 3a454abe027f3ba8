//! Level table and per-level start geometry
//!
//! A level is an index into a table of parameters. The ball and paddle start
//! position for a level is derived from the table entry, never recomputed
//! ad hoc at the call site.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{
    BALL_BASE_SPEED, BALL_SPEED_PER_LEVEL, LEVEL_PALETTE, PADDLE_OFFSET_PER_LEVEL,
};

/// Parameters for a single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    /// CSS colour used for the ball, paddle, bricks and HUD
    pub color: String,
    /// How far the paddle is raised above its base line
    pub paddle_offset: f32,
    /// Per-axis ball speed at launch
    pub ball_speed: f32,
}

impl LevelParams {
    /// The six-level table: the paddle climbs and the ball speeds up linearly
    pub fn default_table() -> Vec<LevelParams> {
        LEVEL_PALETTE
            .iter()
            .enumerate()
            .map(|(i, color)| LevelParams {
                color: (*color).to_string(),
                paddle_offset: PADDLE_OFFSET_PER_LEVEL * i as f32,
                ball_speed: BALL_BASE_SPEED + BALL_SPEED_PER_LEVEL * i as f32,
            })
            .collect()
    }
}

/// Policy once the player clears the last level in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelOverflow {
    /// Clearing the final level wins the game
    #[default]
    Win,
    /// Keep going forever with the last entry's colour and offset while the
    /// ball keeps speeding up
    Clamp,
}

/// Where the ball and paddle sit at the start of a level or after a lost life
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartPose {
    pub paddle_pos: Vec2,
    pub ball_pos: Vec2,
    /// Launch speed along each axis
    pub speed: f32,
}

impl StartPose {
    pub fn for_level(config: &GameConfig, level: u32) -> Self {
        let params = config.level_params(level);
        let paddle_y = config.canvas_height - config.paddle_height - params.paddle_offset;
        Self {
            paddle_pos: Vec2::new((config.canvas_width - config.paddle_width) / 2.0, paddle_y),
            ball_pos: Vec2::new(config.canvas_width / 2.0, paddle_y - config.ball_radius),
            speed: config.ball_speed(level),
        }
    }
}

/// Lowest y the ball centre may reach before it must meet the paddle
#[inline]
pub fn paddle_threshold(config: &GameConfig, level: u32) -> f32 {
    config.canvas_height
        - config.ball_radius
        - config.paddle_height
        - config.level_params(level).paddle_offset
}
