use std::sync::mpsc;

use anyhow::{Context, Result};
use minefeed_engine::{ensure_output_dir, FeedWriter, HttpClient};

use crate::config::AppConfig;
use crate::scheduler::{self, Scheduler};
use crate::server::{self, StaticServer};

/// Owns the background scheduler and the HTTP server.
///
/// All lifecycle state lives here; there are no process-wide globals, and
/// `stop` is idempotent.
pub struct App {
    config: AppConfig,
    running: Option<Running>,
}

struct Running {
    scheduler: Scheduler,
    server: StaticServer,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            running: None,
        }
    }

    /// Builds the first feed, then binds the server.
    ///
    /// The server only starts accepting once the first cycle has reported,
    /// so clients never see an empty directory unless that cycle failed; a
    /// failed first cycle is logged and retried on the normal schedule.
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Ok(());
        }

        ensure_output_dir(&self.config.output_dir).context("output directory")?;

        let client = HttpClient::new(&self.config.fetch).context("http client")?;
        let writer = FeedWriter::new(self.config.output_dir.clone());
        let (ready_tx, ready_rx) = mpsc::channel();
        let scheduler = scheduler::spawn(
            client,
            self.config.cycle.clone(),
            writer,
            self.config.refresh_interval,
            ready_tx,
        );

        match ready_rx.recv() {
            Ok(true) => {}
            Ok(false) => log::warn!("starting server before a successful feed build"),
            Err(_) => log::warn!("scheduler exited before reporting its first cycle"),
        }

        let server = match server::bind(self.config.port, self.config.output_dir.clone()) {
            Ok(server) => server,
            Err(err) => {
                scheduler.stop();
                return Err(err);
            }
        };

        self.running = Some(Running { scheduler, server });
        Ok(())
    }

    /// Stops the timer and the server; calling it again is a no-op.
    pub fn stop(&mut self) {
        if let Some(Running { scheduler, server }) = self.running.take() {
            scheduler.stop();
            server.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_without_start_is_a_no_op() {
        let mut app = App::new(AppConfig::default());
        app.stop();
        app.stop();
    }
}
