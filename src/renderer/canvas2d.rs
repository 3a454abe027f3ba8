//! Replays draw commands on a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::DrawCommand;

/// Draw a whole scene
pub fn draw(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    for command in commands {
        match command {
            DrawCommand::Clear { size } => {
                ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::RoundRect {
                pos,
                size,
                radius,
                color,
            } => {
                ctx.begin_path();
                round_rect_path(
                    ctx,
                    pos.x as f64,
                    pos.y as f64,
                    size.x as f64,
                    size.y as f64,
                    *radius as f64,
                )?;
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Text {
                pos,
                text,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
    }
    Ok(())
}

/// Trace a rounded rectangle; the radius is limited to half the short side
fn round_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    Ok(())
}
