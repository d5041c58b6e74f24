//! Error taxonomy.
//!
//! Settings errors are fatal and stop the program before a window exists.
//! Render errors are reported per call and logged by the frame loop.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("wrong number of arguments ({count}); usage: <size> <cells> | <width> <height> <cols> <rows>")]
    Usage { count: usize },

    #[error("{name} must be an integer, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} is {value}, minimum is {minimum}")]
    BelowMinimum {
        name: &'static str,
        value: i64,
        minimum: i64,
    },

    #[error("{name} is {value}, maximum is {maximum}")]
    AboveMaximum {
        name: &'static str,
        value: i64,
        maximum: i64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("failed to clear frame: {0}")]
    Clear(String),

    #[error("failed to draw cell at ({x}, {y}): {reason}")]
    Draw { x: i32, y: i32, reason: String },

    #[error("failed to present frame: {0}")]
    Present(String),
}
