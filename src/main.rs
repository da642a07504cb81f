//! Ice Cold Beer entry point
//!
//! Sets up the terminal and runs the fixed-timestep game loop.
//!
//! Logging only ever goes to the settings' `log_file`. Without one the logger
//! is never installed, so `RUST_LOG` alone cannot write over the game screen.

use std::error::Error;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use ice_cold_beer::platform::{FrameClock, InputLatch, KeyBindings};
use ice_cold_beer::renderer;
use ice_cold_beer::settings::Settings;
use ice_cold_beer::sim::{GameState, Snapshot, tick};

#[derive(Parser)]
#[command(name = "ice-cold-beer")]
#[command(about = "Guide the ball up the lever into the flashing goal")]
struct Args {
    /// Path to the JSON settings file
    #[arg(short, long, default_value = "ice-cold-beer.json")]
    config: PathBuf,

    /// Override the tick rate from the settings file
    #[arg(long)]
    fps: Option<u32>,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut settings = Settings::load(&args.config)?;
    if let Some(fps) = args.fps {
        settings.ticks_per_second = fps;
    }
    settings.validate()?;
    init_logging(&settings)?;

    log::info!(
        "Ice Cold Beer starting ({} ticks/s, config {})",
        settings.ticks_per_second,
        args.config.display()
    );
    let state = GameState::new(settings.tuning.clone())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = run(&mut terminal, state, &settings);

    if let Err(e) = &result {
        log::error!("Game loop failed: {e}");
    }
    let restored = restore_terminal(&mut terminal);
    log::info!("Ice Cold Beer exiting");
    result.and(restored).map_err(Into::into)
}

/// Run every restore step even if one fails, reporting the first error
fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    first_error([raw, screen, cursor])
}

fn first_error(steps: [io::Result<()>; 3]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step {
            log::error!("Terminal restore failed: {e}");
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}

/// Pipe logs into `log_file`, filtered by RUST_LOG (default info)
fn init_logging(settings: &Settings) -> io::Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(terminal: &mut Tui, mut state: GameState, settings: &Settings) -> io::Result<()> {
    let dt = settings.tick_dt();
    let mut clock = FrameClock::new(settings.ticks_per_second);
    let mut input = InputLatch::new(KeyBindings::default());

    loop {
        // Collect key presses until the next tick is due
        loop {
            let timeout = clock.remaining();
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                input.handle_key(key);
            }
            if timeout.is_zero() {
                break;
            }
        }

        if input.exit_requested() {
            log::info!("Exit requested at tick {}", state.time_ticks);
            return Ok(());
        }

        let phase = state.phase;
        for event in tick(&mut state, &input.take(), dt) {
            log::debug!("Event: {event:?}");
        }
        if state.phase != phase {
            log::debug!("Phase {:?} -> {:?}", phase, state.phase);
        }

        let snapshot = Snapshot::capture(&state);
        let fps = settings.show_fps.then(|| clock.fps());
        terminal.draw(|frame| renderer::render(frame, &snapshot, fps))?;

        clock.finish_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_reports_first_failure() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());

        let err = first_error([
            Ok(()),
            Err(io::Error::other("alternate screen")),
            Err(io::Error::other("cursor")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "alternate screen");
    }

    #[test]
    fn test_no_log_file_installs_no_logger() {
        let settings = Settings::default();
        assert!(init_logging(&settings).is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
