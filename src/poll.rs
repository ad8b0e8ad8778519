//! Cancellable interval polling.
//!
//! Live views poll the backend (resource positions, the flood snapshot)
//! on a fixed cadence. Each poller is a spawned task owned by a handle;
//! stopping or dropping the handle ends the task, so a torn-down view
//! leaves no orphaned timer behind.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle owning a running poller.
pub struct PollHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Signal the poller to stop and wait for it to finish. A tick in
    /// flight completes first.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map(JoinHandle::is_finished).unwrap_or(true)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

/// Spawn a task invoking `tick` every `interval` until stopped.
///
/// The first tick fires immediately.
pub fn spawn_polling<F, Fut>(interval: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let (shutdown, mut stopped) = watch::channel(false);
    let task = tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = timer.tick() => tick().await,
                _ = stopped.changed() => {
                    debug!("poller stopped");
                    break;
                }
            }
        }
    });

    PollHandle {
        shutdown,
        task: Some(task),
    }
}
