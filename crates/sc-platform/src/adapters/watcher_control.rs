use tokio::sync::mpsc;

use sc_core::ports::watcher_control::{WatcherControlError, WatcherControlPort};

use crate::ipc::PlatformCommand;

/// Watcher control implementation over the platform command channel.
///
/// Lifecycle requests are forwarded to the platform runtime through the
/// in-process command channel; the runtime applies them to every
/// registered watch runtime.
pub struct ChannelWatcherControl {
    cmd_tx: mpsc::Sender<PlatformCommand>,
}

impl ChannelWatcherControl {
    pub fn new(cmd_tx: mpsc::Sender<PlatformCommand>) -> Self {
        Self { cmd_tx }
    }

    fn map_send_error(
        &self,
        err: mpsc::error::SendError<PlatformCommand>,
        stopping: bool,
    ) -> WatcherControlError {
        if self.cmd_tx.is_closed() {
            WatcherControlError::ChannelClosed
        } else if stopping {
            WatcherControlError::StopFailed(err.to_string())
        } else {
            WatcherControlError::StartFailed(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl WatcherControlPort for ChannelWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.cmd_tx
            .send(PlatformCommand::StartWatchers)
            .await
            .map_err(|e| self.map_send_error(e, false))?;

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.cmd_tx
            .send(PlatformCommand::StopWatchers)
            .await
            .map_err(|e| self.map_send_error(e, true))?;

        Ok(())
    }
}
