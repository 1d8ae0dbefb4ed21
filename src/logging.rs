//! Logging
//!
//! Structured logs go to a file next to the database. The terminal belongs
//! to the TUI, so nothing is ever written to stdout or stderr.
//!
//! `RUST_LOG` overrides the configured filter, e.g. `RUST_LOG=logins=debug`.
//! Passwords are never passed to any log macro.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::app::AppConfig;

pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("opening log file {}", config.log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")?;

    Ok(())
}
