mod cell;
mod grid;

pub use cell::{Cell, CellState};
pub use grid::Grid;
