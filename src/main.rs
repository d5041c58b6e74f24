use std::process::ExitCode;

use conway_life::{
    Grid, LoopConfig, LoopController, Settings, SettingsError, SystemClock,
    input::MacroquadEvents,
    rendering::MacroquadSurface,
};
use log::{error, info};
use macroquad::Window;
use macroquad::prelude::{Conf, next_frame, prevent_quit};

fn window_side(name: &'static str, value: u32) -> Result<i32, SettingsError> {
    i32::try_from(value).map_err(|_| SettingsError::AboveMaximum {
        name,
        value: i64::from(value),
        maximum: i64::from(i32::MAX),
    })
}

fn window_conf(settings: &Settings) -> Result<Conf, SettingsError> {
    Ok(Conf {
        window_title: "Game of Life".to_owned(),
        window_width: window_side("width", settings.window_width)?,
        window_height: window_side("height", settings.window_height)?,
        window_resizable: false,
        ..Default::default()
    })
}

async fn run(settings: Settings) {
    // Window close becomes a quit event for the controller
    prevent_quit();

    let mut grid = Grid::new(
        settings.window_width,
        settings.window_height,
        settings.cols,
        settings.rows,
    );
    let config = LoopConfig::default();
    let fps = config.target_fps;
    let mut controller = LoopController::new(config, SystemClock::new());
    let mut events = MacroquadEvents::new();
    let mut surface = MacroquadSurface::new();

    let (cell_w, cell_h) = grid.cell_pixel_size();
    info!(
        "Game is starting: {} fps, {}x{} px cells",
        fps,
        cell_w,
        cell_h
    );

    while controller.is_running() {
        controller.run_frame(&mut grid, &mut events, &mut surface);
        next_frame().await;
        controller.pace();
    }
    info!(
        "Stopped after {} frames, {} generations",
        controller.frame_count(),
        controller.generation()
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (settings, conf) = match Settings::from_args(std::env::args().skip(1))
        .and_then(|settings| Ok((settings, window_conf(&settings)?)))
    {
        Ok(parts) => parts,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Window {}x{}, grid {}x{}",
        settings.window_width, settings.window_height, settings.cols, settings.rows
    );

    Window::from_config(conf, run(settings));
    ExitCode::SUCCESS
}
