use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use minefeed_engine::{run_cycle, CycleSettings, FeedWriter, HttpClient, LogEventSink};

/// Handle to the repeating build task.
///
/// The timer lives on a dedicated thread that owns its tokio runtime; the
/// shutdown channel doubles as the timer, so cancelling it is a single send
/// and there is never more than one cycle in flight.
pub struct Scheduler {
    shutdown_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Spawns the scheduler. The first cycle runs immediately; its outcome is
/// reported once on `ready_tx` so the caller can delay server startup until
/// the feeds exist on disk.
pub fn spawn(
    client: HttpClient,
    settings: CycleSettings,
    writer: FeedWriter,
    period: Duration,
    ready_tx: Sender<bool>,
) -> Scheduler {
    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        run_loop(client, settings, writer, period, ready_tx, shutdown_rx);
    });
    Scheduler {
        shutdown_tx,
        handle,
    }
}

impl Scheduler {
    /// Cancels the timer and waits for the thread.
    ///
    /// A cycle already in flight is allowed to finish; its duration is
    /// bounded by the fetch timeouts.
    pub fn stop(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.join();
    }
}

fn run_loop(
    client: HttpClient,
    settings: CycleSettings,
    writer: FeedWriter,
    period: Duration,
    ready_tx: Sender<bool>,
    shutdown_rx: Receiver<()>,
) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut ready = Some(ready_tx);

    loop {
        let published = run_once(&runtime, &client, &settings, &writer);
        if let Some(tx) = ready.take() {
            let _ = tx.send(published);
        }

        match shutdown_rx.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    log::info!("scheduler stopped");
}

fn run_once(
    runtime: &tokio::runtime::Runtime,
    client: &HttpClient,
    settings: &CycleSettings,
    writer: &FeedWriter,
) -> bool {
    match runtime.block_on(run_cycle(client, settings, &LogEventSink)) {
        Ok(feed) => match writer.publish(&feed) {
            Ok(()) => {
                log::info!("published {} feed items", feed.items.len());
                true
            }
            Err(err) => {
                log::error!("feed publish failed, keeping previous output: {err}");
                false
            }
        },
        Err(err) => {
            log::warn!("feed cycle abandoned: {err}");
            false
        }
    }
}
