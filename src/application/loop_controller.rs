use std::time::Duration;

use log::{debug, warn};

use super::settings::LoopConfig;
use super::timing::Clock;
use crate::domain::Grid;
use crate::input::{ControlCommand, EventSource, InputTranslator, SimulationCommand, Translation};
use crate::rendering::{self, Surface};

/// Whether the outer loop keeps going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Active,
    Quitting,
}

/// Whether generations are being computed; rendering continues either way
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stepping {
    Running,
    Paused,
}

impl Stepping {
    fn flipped(self) -> Self {
        match self {
            Stepping::Running => Stepping::Paused,
            Stepping::Paused => Stepping::Running,
        }
    }
}

/// A cell toggled by the pointer: grid index and pixel origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggledCell {
    pub col: usize,
    pub row: usize,
    pub x: i32,
    pub y: i32,
}

/// What happened during the body of one frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based frame number
    pub frame: u64,
    pub controls: Vec<ControlCommand>,
    pub toggled: Vec<ToggledCell>,
    /// Deferred events with no simulation meaning
    pub ignored: usize,
    pub stepped: bool,
    pub render_failures: usize,
}

/// Timing outcome of one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePace {
    pub elapsed: Duration,
    pub slept: Duration,
    /// Set when the frame used its whole budget
    pub overrun: Option<Duration>,
}

/// Sequences input, simulation and rendering, one frame at a time.
///
/// Starts active and paused so a pattern can be drawn before the first
/// generation. A quit request is observed at the top of the next iteration.
pub struct LoopController<C: Clock> {
    config: LoopConfig,
    translator: InputTranslator,
    activity: Activity,
    stepping: Stepping,
    frames: u64,
    generation: u64,
    frame_started: Duration,
    clock: C,
}

impl<C: Clock> LoopController<C> {
    pub fn new(config: LoopConfig, clock: C) -> Self {
        Self {
            translator: InputTranslator::new(config.bindings),
            config,
            activity: Activity::Active,
            stepping: Stepping::Paused,
            frames: 0,
            generation: 0,
            frame_started: Duration::ZERO,
            clock,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    pub fn is_running(&self) -> bool {
        self.activity == Activity::Active
    }

    pub fn is_paused(&self) -> bool {
        self.stepping == Stepping::Paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Generations computed since start or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame_budget(&self) -> Duration {
        self.config.frame_budget()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn schedule_quit(&mut self) {
        debug!("Scheduled quit");
        self.activity = Activity::Quitting;
    }

    pub fn toggle_pause(&mut self) {
        self.stepping = self.stepping.flipped();
        debug!("Paused: {}", self.is_paused());
    }

    pub fn pause(&mut self) {
        self.stepping = Stepping::Paused;
    }

    pub fn resume(&mut self) {
        self.stepping = Stepping::Running;
    }

    fn apply_control(&mut self, command: ControlCommand, grid: &mut Grid) {
        match command {
            ControlCommand::Quit => self.schedule_quit(),
            ControlCommand::TogglePause => self.toggle_pause(),
            ControlCommand::Reset => {
                grid.reset();
                self.generation = 0;
                debug!("Grid reset");
            }
        }
    }

    fn is_generation_frame(&self) -> bool {
        let every = u64::from(self.config.frames_per_generation.max(1));
        self.frames % every == 0
    }

    /// Frame body: drain input, apply commands, advance the grid, render.
    pub fn run_frame<E, S>(&mut self, grid: &mut Grid, events: &mut E, surface: &mut S) -> FrameReport
    where
        E: EventSource + ?Sized,
        S: Surface + ?Sized,
    {
        self.frame_started = self.clock.now();
        let mut report = FrameReport::default();

        let mut incoming = Vec::new();
        events.poll(&mut incoming);

        let mut deferred = Vec::new();
        for event in incoming {
            match self.translator.translate(event) {
                Translation::Control(command) => {
                    self.apply_control(command, grid);
                    report.controls.push(command);
                }
                Translation::Deferred(event) => deferred.push(event),
            }
        }

        for event in &deferred {
            match self.translator.simulation_command(event) {
                Some(SimulationCommand::ToggleCellAt { x, y }) => {
                    debug!("Mouse: {x} {y}");
                    let toggled = grid.locate_and_toggle(x, y).and_then(|(col, row)| {
                        grid.cell(col, row).map(|cell| ToggledCell {
                            col,
                            row,
                            x: cell.x(),
                            y: cell.y(),
                        })
                    });
                    if let Some(cell) = toggled {
                        debug!(
                            "Cell clicked: {} {} [{}, {}]",
                            cell.x, cell.y, cell.col, cell.row
                        );
                        report.toggled.push(cell);
                    }
                }
                None => report.ignored += 1,
            }
        }

        if !self.is_paused() && self.is_generation_frame() {
            grid.step();
            self.generation += 1;
            report.stepped = true;
        } else {
            grid.commit();
        }

        report.render_failures = rendering::draw_grid(grid, surface);
        self.frames += 1;
        report.frame = self.frames;
        report
    }

    /// Block for whatever remains of the frame budget, or report the overrun.
    pub fn pace(&mut self) -> FramePace {
        let budget = self.frame_budget();
        let elapsed = self.clock.now().saturating_sub(self.frame_started);

        if budget.is_zero() {
            return FramePace {
                elapsed,
                slept: Duration::ZERO,
                overrun: None,
            };
        }

        if budget > elapsed {
            let remaining = budget - elapsed;
            self.clock.sleep(remaining);
            FramePace {
                elapsed,
                slept: remaining,
                overrun: None,
            }
        } else {
            let overrun = elapsed - budget;
            warn!(
                "Max loop time exceeded: frame: {}, delta: {}ms, over by {}ms",
                self.frames,
                elapsed.as_millis(),
                overrun.as_millis()
            );
            FramePace {
                elapsed,
                slept: Duration::ZERO,
                overrun: Some(overrun),
            }
        }
    }

    /// Run frames until a quit is scheduled
    pub fn run<E, S>(&mut self, grid: &mut Grid, events: &mut E, surface: &mut S)
    where
        E: EventSource + ?Sized,
        S: Surface + ?Sized,
    {
        while self.is_running() {
            self.run_frame(grid, events, surface);
            self.pace();
        }
    }
}
