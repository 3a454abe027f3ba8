//! Scene construction for 2D primitives
//!
//! A pure projection of the simulation. Nothing here affects gameplay.

use glam::Vec2;

use crate::sim::GameSimulation;
use crate::sim::rng::DirectionSource;

/// Corner radius of bricks
pub const BRICK_CORNER_RADIUS: f32 = 6.0;
/// HUD font
pub const HUD_FONT: &str = "16px Arial";
/// Radius of a life indicator dot
pub const LIFE_DOT_RADIUS: f32 = 6.0;
/// Horizontal spacing between life dots
pub const LIFE_DOT_SPACING: f32 = 14.0;

/// One drawing operation on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole canvas
    Clear { size: Vec2 },
    /// Filled rectangle with rounded corners
    RoundRect {
        pos: Vec2,
        size: Vec2,
        radius: f32,
        color: String,
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    /// Filled text, `pos` is the baseline start
    Text {
        pos: Vec2,
        text: String,
        font: &'static str,
        color: String,
    },
}

/// Build the full frame: background, bricks, paddle, ball, score and lives
pub fn build_scene<R: DirectionSource>(sim: &GameSimulation<R>) -> Vec<DrawCommand> {
    let config = sim.config();
    let color = &sim.level_params().color;
    let width = config.canvas_width;

    let mut commands = Vec::with_capacity(sim.bricks().len() + 8);
    commands.push(DrawCommand::Clear {
        size: Vec2::new(width, config.canvas_height),
    });

    for brick in sim.bricks().iter() {
        commands.push(DrawCommand::RoundRect {
            pos: brick.pos,
            size: brick.size,
            radius: BRICK_CORNER_RADIUS,
            color: color.clone(),
        });
    }

    let paddle = sim.paddle();
    commands.push(DrawCommand::RoundRect {
        pos: paddle.pos,
        size: paddle.size,
        radius: paddle.size.y / 2.0,
        color: color.clone(),
    });

    let ball = sim.ball();
    commands.push(DrawCommand::Circle {
        center: ball.pos,
        radius: ball.radius,
        color: color.clone(),
    });

    commands.push(DrawCommand::Text {
        pos: Vec2::new(10.0, 20.0),
        text: format!("Score: {}", sim.state().score),
        font: HUD_FONT,
        color: color.clone(),
    });
    commands.push(DrawCommand::Text {
        pos: Vec2::new(width - 95.0, 21.0),
        text: "Lives:".to_string(),
        font: HUD_FONT,
        color: color.clone(),
    });
    for i in 0..sim.state().lives {
        commands.push(DrawCommand::Circle {
            center: Vec2::new(i as f32 * LIFE_DOT_SPACING + width - 42.0, 16.0),
            radius: LIFE_DOT_RADIUS,
            color: color.clone(),
        });
    }

    commands
}
