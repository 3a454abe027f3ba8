//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_rect_overlap;
use super::levels::StartPose;
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted
    GameOver,
    /// Every level in the table cleared
    Won,
}

impl GamePhase {
    /// Terminal phases accept no further mutation
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball resting on the paddle, launched upward in `direction` (±1)
    pub fn launch(pose: &StartPose, radius: f32, direction: f32) -> Self {
        Self {
            pos: pose.ball_pos,
            vel: Vec2::new(pose.speed * direction, -pose.speed),
            radius,
        }
    }

    /// Position after one more step at the current velocity
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pose: &StartPose, config: &GameConfig) -> Self {
        Self {
            pos: pose.paddle_pos,
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Shift horizontally, staying within `[0, canvas_width - width]`
    pub fn shift(&mut self, dx: f32, canvas_width: f32) {
        let max_x = (canvas_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub row: u32,
    pub column: u32,
}

impl Brick {
    #[inline]
    pub fn overlaps(&self, center: Vec2, radius: f32) -> bool {
        circle_rect_overlap(center, radius, self.pos, self.size)
    }
}

/// The bricks still standing in the current level
///
/// Ordered column-major. Within a level bricks are only ever removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// A fully populated grid for the configured layout
    pub fn generate(config: &GameConfig) -> Self {
        let size = Vec2::new(config.brick_width, config.brick_height);
        let step_x = config.brick_width + config.brick_padding;
        let step_y = config.brick_height + config.brick_padding * config.brick_row_padding_factor;

        let mut bricks = Vec::with_capacity(config.grid_size());
        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                bricks.push(Brick {
                    pos: Vec2::new(
                        column as f32 * step_x + config.brick_offset_left,
                        row as f32 * step_y + config.brick_offset_top,
                    ),
                    size,
                    row,
                    column,
                });
            }
        }
        Self { bricks }
    }

    /// Build a grid from explicit bricks (kept in the given order)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    /// Index of the first brick the ball touches, in grid order
    pub fn first_hit(&self, center: Vec2, radius: f32) -> Option<usize> {
        self.bricks.iter().position(|b| b.overlaps(center, radius))
    }

    /// Remove a brick, preserving the order of the rest
    pub fn remove(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }
}

/// Session bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current level index (0-based)
    pub level: u32,
    /// Bricks destroyed this session
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(lives: u8) -> Self {
        Self {
            level: 0,
            score: 0,
            lives,
            phase: GamePhase::Playing,
        }
    }
}
