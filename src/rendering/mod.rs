//! Drawing the grid onto a pixel surface.

mod macroquad_surface;

pub use macroquad_surface::MacroquadSurface;

use log::error;

use crate::domain::{Cell, Grid};
use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn grey(level: u8) -> Self {
        Self(level, level, level, 255)
    }
}

pub const BACKGROUND_COLOR: Rgba = Rgba::grey(255);
pub const ALIVE_COLOR: Rgba = Rgba::grey(127);
pub const DEAD_COLOR: Rgba = Rgba::grey(255);
pub const BORDER_COLOR: Rgba = Rgba::grey(0);

/// Axis-aligned rectangle in window pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Drawing primitives the frame loop needs from a window backend
pub trait Surface {
    fn clear(&mut self, color: Rgba) -> Result<(), RenderError>;
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) -> Result<(), RenderError>;
    fn outline_rect(&mut self, rect: PixelRect, color: Rgba) -> Result<(), RenderError>;
    /// Flush the frame; backends that flush asynchronously may do nothing here
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Fill colour for a cell's current state
pub const fn cell_color(cell: &Cell) -> Rgba {
    if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR }
}

/// Draw every cell and present the frame.
///
/// Failures are logged and counted; drawing continues with the next call.
pub fn draw_grid<S: Surface + ?Sized>(grid: &Grid, surface: &mut S) -> usize {
    let (width, height) = grid.cell_pixel_size();
    let mut failures = 0;
    let mut report = |result: Result<(), RenderError>| {
        if let Err(err) = result {
            error!("{err}");
            failures += 1;
        }
    };

    report(surface.clear(BACKGROUND_COLOR));
    for cell in grid.cells() {
        let rect = PixelRect {
            x: cell.x(),
            y: cell.y(),
            width,
            height,
        };
        report(surface.fill_rect(rect, cell_color(cell)));
        report(surface.outline_rect(rect, BORDER_COLOR));
    }
    report(surface.present());

    failures
}
