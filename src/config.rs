//! Configuration and CLI argument handling

use crate::clock::ClockValue;
use crate::driver::DEFAULT_INTERVAL;
use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Count down from a start time to an end time in the terminal")]
#[command(version)]
pub struct Config {
    /// Prefill for the start time field (hh:mm:ss)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Prefill for the end time field (hh:mm:ss)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Start counting down immediately (needs --start and --end)
    #[arg(long)]
    pub autostart: bool,

    /// Milliseconds between two ticks
    #[arg(long, default_value = "1000")]
    pub interval_ms: u64,

    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Validates the arguments the widget depends on.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        for (name, value) in [("--start", &self.start), ("--end", &self.end)] {
            if let Some(value) = value {
                value
                    .parse::<ClockValue>()
                    .with_context(|| format!("{} {:?}", name, value))?;
            }
        }
        if self.autostart && (self.start.is_none() || self.end.is_none()) {
            bail!("--autostart needs both --start and --end");
        }
        if self.interval_ms == 0 {
            bail!("--interval-ms must be greater than zero");
        }

        Ok(Settings {
            start: self.start.clone(),
            end: self.end.clone(),
            autostart: self.autostart,
            interval: Duration::from_millis(self.interval_ms),
        })
    }
}

/// What the widget needs from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Initial contents of the start field.
    pub start: Option<String>,
    /// Initial contents of the end field.
    pub end: Option<String>,
    /// Submit the form as soon as the widget starts.
    pub autostart: bool,
    /// Delay between ticks.
    pub interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            autostart: false,
            interval: DEFAULT_INTERVAL,
        }
    }
}
