mod ai;
mod config;
mod game;
mod game_modes;
mod logging;
mod ui;

use anyhow::{bail, Context};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info};

use config::Config;
use ui::surface::{MIN_COLS, MIN_ROWS};
use ui::ArenaViewport;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    // Config first: it decides whether and where to log
    let config = config::load_config().context("failed to load configuration")?;
    logging::init(&config.logging).context("failed to initialise logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "ttypong starting");

    let mut terminal = setup_terminal().context("failed to initialise terminal")?;

    let result = run(&mut terminal, &config);

    // Restore terminal before any diagnostic reaches stderr
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    if let Err(ref e) = result {
        error!(error = %e, "exiting with error");
    } else {
        info!("ttypong exited normally");
    }
    result
}

fn run(terminal: &mut Tui, config: &Config) -> anyhow::Result<()> {
    let size = terminal.size().context("failed to query terminal size")?;
    if !ArenaViewport::fits(size.width, size.height) {
        bail!(
            "terminal too small: {}x{}, need at least {}x{}",
            size.width,
            size.height,
            MIN_COLS,
            MIN_ROWS
        );
    }

    game_modes::run_game_vs_bot(terminal, config).context("game loop failed")?;
    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_rollback(
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
        || {
            disable_raw_mode().ok();
        },
    )?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        // Pointer is the controller, keep the text cursor out of the arena
        terminal.hide_cursor()?;
        Ok(terminal)
    });
    or_rollback(terminal, || {
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();
        disable_raw_mode().ok();
    })
}

/// Run `rollback` when a setup step failed, then hand the result back
fn or_rollback<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
