use async_trait::async_trait;

/// Port for controlling the watcher lifecycle.
///
/// Both operations are idempotent: starting a running watcher set or
/// stopping a stopped one is safe.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the watchers to start.
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Request the watchers to stop.
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("failed to send start command: {0}")]
    StartFailed(String),

    #[error("failed to send stop command: {0}")]
    StopFailed(String),

    #[error("watcher channel closed")]
    ChannelClosed,
}
