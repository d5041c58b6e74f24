use macroquad::color::Color;
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::window::clear_background;

use super::{PixelRect, Rgba, Surface};
use crate::error::RenderError;

const BORDER_THICKNESS: f32 = 1.0;

/// Draws through macroquad's immediate-mode API.
///
/// macroquad reports no per-call failures, and the frame is flushed by
/// `next_frame().await` in the driver, so every call succeeds.
#[derive(Debug, Default)]
pub struct MacroquadSurface;

impl MacroquadSurface {
    pub fn new() -> Self {
        Self
    }
}

fn to_color(Rgba(r, g, b, a): Rgba) -> Color {
    Color::from_rgba(r, g, b, a)
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Rgba) -> Result<(), RenderError> {
        clear_background(to_color(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) -> Result<(), RenderError> {
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
            to_color(color),
        );
        Ok(())
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Rgba) -> Result<(), RenderError> {
        draw_rectangle_lines(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
            BORDER_THICKNESS,
            to_color(color),
        );
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
