//! Use case for stopping the watch runtimes.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sc_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum StopWatchersError {
    #[error("failed to stop watchers: {0}")]
    StopFailed(String),
}

impl From<WatcherControlError> for StopWatchersError {
    fn from(err: WatcherControlError) -> Self {
        StopWatchersError::StopFailed(err.to_string())
    }
}

/// Requests the watchers to stop through the control port. Idempotent.
pub struct StopWatchers {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopWatchers {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StopWatchersError> {
        let span = info_span!("usecase.stop_watchers.execute");

        async {
            self.watcher_control.stop_watcher().await?;
            info!("watchers requested to stop");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
