//! countdown - count down from a start time to an end time in the terminal
//!
//! This is the main entry point for the countdown widget.

use bubbletea_rs::Program;
use tracing::info;

use countdown_timer::{app, config::Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    logging::init(&config)?;
    let settings = config.settings()?;

    info!("Starting countdown v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: start={:?}, end={:?}, autostart={}, interval={:?}",
        settings.start, settings.end, settings.autostart, settings.interval
    );

    app::configure(settings);

    let program = Program::<app::Model>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| anyhow::anyhow!("building terminal program: {e}"))?;

    program
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("terminal program failed: {e}"))?;

    info!("Countdown exited");
    Ok(())
}
