//! Logins - Local Login Keeper
//!
//! A small vim-style TUI that keeps account name, email and password
//! triples in a local SQLite settings table.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod db;
mod input;
mod logging;
mod store;
mod ui;

use app::{App, AppConfig};
use db::{Database, DatabaseConfig};
use store::CredentialStore;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let data_path = args.get(1).map(PathBuf::from);

    let mut config = AppConfig::default();
    if let Some(path) = data_path {
        config.data_path = path;
    }

    logging::init(&config)?;

    let db = Database::open(DatabaseConfig::with_path(config.data_path.clone()))
        .with_context(|| format!("opening {}", config.data_path.display()))?;
    tracing::info!(path = %db.path().display(), "Starting");
    let mut app = App::new(config, CredentialStore::new(db));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key_event(key) {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
