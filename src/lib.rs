// Domain layer - cells, grid and the generation rule
pub mod domain;

// Application layer - settings, pacing and the frame loop
pub mod application;

// Infrastructure layer - input, rendering
pub mod input;
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{LoopConfig, LoopController, Settings, SystemClock};
pub use domain::{Cell, CellState, Grid};
pub use error::{RenderError, SettingsError};
