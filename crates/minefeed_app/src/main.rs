mod app;
mod config;
mod scheduler;
mod server;

use std::sync::mpsc;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::app::App;
use crate::config::AppConfig;

fn main() -> Result<()> {
    feed_logging::initialize(LevelFilter::Info);

    let config = AppConfig::from_env()?;
    let mut app = App::new(config);

    // Register the signal handler before the first build so a termination
    // signal during a mid-flight cycle still shuts down cleanly.
    let (signal_tx, signal_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = signal_tx.send(());
    })
    .context("signal handler")?;

    app.start()?;

    let _ = signal_rx.recv();
    log::info!("shutdown signal received");
    app.stop();
    Ok(())
}
