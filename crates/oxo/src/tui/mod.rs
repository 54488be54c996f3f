//! Terminal UI for oxo.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,oxo=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting oxo TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_error(enter_alternate_screen(), restore_terminal)?;

    let res = run_game(&mut terminal, &config).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `restore` when terminal setup failed, then hands back the result.
fn restore_on_error<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if let Err(err) = &result {
        error!(error = %err, "Terminal setup failed");
        if let Err(restore_err) = restore() {
            error!(error = %restore_err, "Failed to restore terminal");
        }
    }
    result
}

#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let mut app = App::new(config, Instant::now());

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Non-blocking input check
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key.code, Instant::now());
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        app.tick(Instant::now());

        sleep(Duration::from_millis(30)).await;
    }
}
