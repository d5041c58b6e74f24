mod loop_controller;
mod settings;
mod timing;

pub use loop_controller::{
    Activity, FramePace, FrameReport, LoopController, Stepping, ToggledCell,
};
pub use settings::{
    DEFAULT_FPS, LoopConfig, MAX_WINDOW_SIDE, MIN_CELLS_PER_AXIS, MIN_WINDOW_SIDE, Settings,
};
pub use timing::{Clock, SystemClock};
