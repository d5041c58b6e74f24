use std::time::Duration;

use crate::error::SettingsError;
use crate::input::KeyBindings;

pub const MIN_WINDOW_SIDE: u32 = 100;
pub const MAX_WINDOW_SIDE: u32 = 16384;
pub const MIN_CELLS_PER_AXIS: usize = 5;
pub const DEFAULT_FPS: u32 = 30;

/// Window and grid dimensions chosen at launch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub cols: usize,
    pub rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 600,
            cols: 60,
            rows: 40,
        }
    }
}

impl Settings {
    /// Build settings from positional launch arguments (program name excluded).
    ///
    /// Accepted forms: none (defaults), `<size> <cells>` applied to both axes,
    /// or `<width> <height> <cols> <rows>`.
    pub fn from_args<I, S>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let (width, height, cols, rows) = match args.as_slice() {
            [] => return Ok(Self::default()),
            [size, cells] => {
                let size = parse("size", size.as_ref())?;
                let cells = parse("cells", cells.as_ref())?;
                (size, size, cells, cells)
            }
            [width, height, cols, rows] => (
                parse("width", width.as_ref())?,
                parse("height", height.as_ref())?,
                parse("cols", cols.as_ref())?,
                parse("rows", rows.as_ref())?,
            ),
            other => return Err(SettingsError::Usage { count: other.len() }),
        };

        check_dimensions(width, height, cols, rows)?;
        // every value is now within [minimum, MAX_WINDOW_SIDE]
        Ok(Self {
            window_width: width as u32,
            window_height: height as u32,
            cols: cols as usize,
            rows: rows as usize,
        })
    }

    /// Check every dimension against its bounds
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_dimensions(
            i64::from(self.window_width),
            i64::from(self.window_height),
            i64::try_from(self.cols).unwrap_or(i64::MAX),
            i64::try_from(self.rows).unwrap_or(i64::MAX),
        )
    }
}

/// Window sides lie in `[MIN_WINDOW_SIDE, MAX_WINDOW_SIDE]`; each cell is
/// at least one pixel, so an axis never has more cells than pixels.
fn check_dimensions(width: i64, height: i64, cols: i64, rows: i64) -> Result<(), SettingsError> {
    let (min_side, max_side) = (i64::from(MIN_WINDOW_SIDE), i64::from(MAX_WINDOW_SIDE));
    let min_cells = MIN_CELLS_PER_AXIS as i64;

    within("width", width, min_side, max_side)?;
    within("height", height, min_side, max_side)?;
    within("cols", cols, min_cells, width)?;
    within("rows", rows, min_cells, height)?;
    Ok(())
}

fn parse(name: &'static str, value: &str) -> Result<i64, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError::NotANumber {
        name,
        value: value.to_owned(),
    })
}

fn within(name: &'static str, value: i64, minimum: i64, maximum: i64) -> Result<(), SettingsError> {
    if value < minimum {
        return Err(SettingsError::BelowMinimum { name, value, minimum });
    }
    if value > maximum {
        return Err(SettingsError::AboveMaximum { name, value, maximum });
    }
    Ok(())
}

/// Frame pacing and input configuration for the loop controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopConfig {
    pub target_fps: u32,
    /// Compute a generation only every N-th frame
    pub frames_per_generation: u32,
    pub bindings: KeyBindings,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_FPS,
            frames_per_generation: 1,
            bindings: KeyBindings::default(),
        }
    }
}

impl LoopConfig {
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_frames_per_generation(mut self, frames: u32) -> Self {
        self.frames_per_generation = frames;
        self
    }

    /// Whole-millisecond budget for one frame; zero fps disables pacing
    pub fn frame_budget(&self) -> Duration {
        match self.target_fps {
            0 => Duration::ZERO,
            fps => Duration::from_millis(u64::from(1000 / fps)),
        }
    }
}
