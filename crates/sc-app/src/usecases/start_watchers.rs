//! Use case for starting the watch runtimes.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sc_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum StartWatchersError {
    #[error("failed to start watchers: {0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartWatchersError {
    fn from(err: WatcherControlError) -> Self {
        StartWatchersError::StartFailed(err.to_string())
    }
}

/// Requests the watchers to start through the control port.
///
/// Starting an already-running watcher set is safe; the control port is
/// idempotent.
pub struct StartWatchers {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartWatchers {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartWatchersError> {
        let span = info_span!("usecase.start_watchers.execute");

        async {
            self.watcher_control.start_watcher().await?;
            info!("watchers requested to start");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
