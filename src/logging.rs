//! Tracing set-up.
//!
//! The terminal belongs to the widget, so logs go to a file or nowhere.

use crate::config::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;

/// Installs a file-backed `tracing` subscriber when `--log-file` is given.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &Config) -> anyhow::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let level = config.log_level();
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={level},countdown={level}"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(true)
}
