use std::time::Duration;

use log::debug;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// One-shot time limit for a whole quiz. The countdown runs as its own task
/// and signals once through a channel.
///
/// Must be armed from within a tokio runtime.
pub struct Deadline {
    limit: Duration,
    signal: oneshot::Receiver<()>,
    timer: JoinHandle<()>,
    fired: bool,
}

impl Deadline {
    pub fn arm(limit: Duration) -> Self {
        let (tx, signal) = oneshot::channel();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            // Nobody is listening any more once the quiz is over.
            let _ = tx.send(());
        });
        debug!("Deadline armed for {:?}", limit);
        Self {
            limit,
            signal,
            timer,
            fired: false,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Resolves once the limit has elapsed, immediately on later calls.
    /// Never resolves after [`Deadline::cancel`].
    ///
    /// Cancel safe: dropping the future before it resolves loses nothing.
    pub async fn expired(&mut self) {
        if self.fired {
            return;
        }
        match (&mut self.signal).await {
            Ok(()) => {
                debug!("Deadline of {:?} fired", self.limit);
                self.fired = true;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    }

    /// Disarms the timer. A deadline that already fired stays fired.
    pub fn cancel(&mut self) {
        if !self.fired {
            debug!("Deadline cancelled");
        }
        self.timer.abort();
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
