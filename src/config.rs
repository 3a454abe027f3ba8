//! Game configuration
//!
//! Every tunable of the simulation lives here so the level table and the
//! canvas geometry can be swapped without touching gameplay code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::levels::{LevelOverflow, LevelParams};

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub ball_radius: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle movement per frame as a fraction of its width
    pub paddle_step_fraction: f32,

    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    /// Row gap is `brick_padding * brick_row_padding_factor`
    pub brick_row_padding_factor: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    pub starting_lives: u8,

    /// One entry per level, indexed by level number
    pub levels: Vec<LevelParams>,
    /// Speed added per level once play runs past the table
    pub ball_speed_per_level: f32,
    /// What happens once the last level in the table is cleared
    pub overflow: LevelOverflow,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ball_radius: BALL_RADIUS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step_fraction: PADDLE_STEP_FRACTION,
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_row_padding_factor: BRICK_ROW_PADDING_FACTOR,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            starting_lives: STARTING_LIVES,
            levels: LevelParams::default_table(),
            ball_speed_per_level: BALL_SPEED_PER_LEVEL,
            overflow: LevelOverflow::default(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key for config overrides (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_breakout_config";

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_step_fraction", self.paddle_step_fraction)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;

        if self.ball_speed_per_level < 0.0 || !self.ball_speed_per_level.is_finite() {
            return Err(ConfigError::Invalid {
                field: "ball_speed_per_level",
                reason: "must be a non-negative finite number",
            });
        }
        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::Invalid {
                field: "paddle_width",
                reason: "paddle is wider than the canvas",
            });
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::Invalid {
                field: "brick_rows",
                reason: "brick grid must have at least one row and one column",
            });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: "must start with at least one life",
            });
        }
        if self.levels.is_empty() {
            return Err(ConfigError::Invalid {
                field: "levels",
                reason: "level table is empty",
            });
        }
        for level in &self.levels {
            positive("levels.ball_speed", level.ball_speed)?;
            if level.paddle_offset < 0.0
                || level.paddle_offset + self.paddle_height > self.canvas_height
            {
                return Err(ConfigError::Invalid {
                    field: "levels.paddle_offset",
                    reason: "paddle would leave the canvas",
                });
            }
        }
        Ok(())
    }

    /// Paddle movement per frame
    #[inline]
    pub fn paddle_step(&self) -> f32 {
        self.paddle_width * self.paddle_step_fraction
    }

    /// Number of bricks in a freshly generated grid
    #[inline]
    pub fn grid_size(&self) -> usize {
        (self.brick_rows * self.brick_columns) as usize
    }

    /// Parameters for a level. Indices past the table reuse the last entry.
    pub fn level_params(&self, level: u32) -> &LevelParams {
        let last = self.levels.len().saturating_sub(1);
        &self.levels[(level as usize).min(last)]
    }

    /// Launch speed for a level. Past the table the last entry's speed keeps
    /// growing by `ball_speed_per_level`; colour and offset stay clamped.
    pub fn ball_speed(&self, level: u32) -> f32 {
        let last = self.levels.len().saturating_sub(1);
        let beyond = (level as usize).saturating_sub(last);
        self.level_params(level).ball_speed + beyond as f32 * self.ball_speed_per_level
    }

    /// Load config overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
