//! Platform event loop.
//!
//! A single cooperative loop owns all in-process reaction to external
//! changes: watcher events come in on one channel, control commands on
//! another, and delivery to observers happens synchronously from here.
//! Subscriber state is only ever touched from this loop.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use sc_core::ports::{ClipboardChangeHandler, SystemClipboardPort};
use sc_core::{ChangeEvent, NotificationBus};

use crate::ipc::{PlatformCommand, PlatformEvent};
use crate::ports::WatcherRuntimePort;

use super::event_bus::{PlatformCommandReceiver, PlatformEventReceiver, PlatformEventSender};

pub struct PlatformRuntime {
    bus: Arc<NotificationBus>,
    clipboard: Arc<dyn SystemClipboardPort>,
    // Kept so the event channel can never close while the loop runs.
    event_tx: PlatformEventSender,
    event_rx: PlatformEventReceiver,
    command_rx: PlatformCommandReceiver,
    runtimes: Vec<Arc<dyn WatcherRuntimePort>>,
    clipboard_handler: Option<Arc<dyn ClipboardChangeHandler>>,
    shutting_down: bool,
}

impl PlatformRuntime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bus: Arc<NotificationBus>,
        clipboard: Arc<dyn SystemClipboardPort>,
        event_tx: PlatformEventSender,
        event_rx: PlatformEventReceiver,
        command_rx: PlatformCommandReceiver,
        runtimes: Vec<Arc<dyn WatcherRuntimePort>>,
        clipboard_handler: Option<Arc<dyn ClipboardChangeHandler>>,
    ) -> Self {
        Self {
            bus,
            clipboard,
            event_tx,
            event_rx,
            command_rx,
            runtimes,
            clipboard_handler,
            shutting_down: false,
        }
    }

    /// Set the clipboard change handler callback.
    ///
    /// Useful when the handler is not available at construction time.
    pub fn set_clipboard_handler(&mut self, handler: Arc<dyn ClipboardChangeHandler>) {
        self.clipboard_handler = Some(handler);
    }

    pub async fn start(mut self) {
        info!("platform runtime started");

        while !self.shutting_down {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event).await;
                }
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => break,
            }
        }

        self.stop_runtimes().await;
        info!("platform runtime stopped");
    }

    async fn handle_event(&self, event: PlatformEvent) {
        match event {
            PlatformEvent::ClipboardChanged { mode, snapshot } => {
                debug!(
                    %mode,
                    representation_count = snapshot.as_ref().map_or(0, |s| s.representation_count()),
                    total_bytes = snapshot.as_ref().map_or(0, |s| s.total_size_bytes()),
                    "clipboard changed"
                );

                self.bus.publish(&ChangeEvent::ClipboardChanged { mode });

                if let Some(handler) = &self.clipboard_handler {
                    if let Err(e) = handler.on_clipboard_changed(mode, snapshot).await {
                        error!(error = %e, %mode, "clipboard change handler failed");
                    }
                }
            }
            PlatformEvent::PreferenceChanged { value } => {
                debug!(%value, "appearance preference changed");
                self.bus.publish(&ChangeEvent::PreferenceChanged { value });
            }
            PlatformEvent::Started => {
                info!("watchers started");
            }
            PlatformEvent::Stopped => {
                info!("watchers stopped");
            }
            PlatformEvent::Error { message } => {
                error!(error = %message, "platform error");
            }
        }
    }

    async fn handle_command(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::Shutdown => {
                self.shutting_down = true;
                info!("platform runtime shutting down");
            }
            PlatformCommand::StartWatchers => {
                debug!("StartWatchers command received");
                for runtime in &self.runtimes {
                    if let Err(e) = runtime.start().await {
                        error!(error = %e, "failed to start watch runtime");
                    }
                }
            }
            PlatformCommand::StopWatchers => {
                debug!("StopWatchers command received");
                self.stop_runtimes().await;
            }
            PlatformCommand::ReadClipboard { mode } => match self.clipboard.read(mode).await {
                Ok(snapshot) => {
                    if let Err(err) = self
                        .event_tx
                        .try_send(PlatformEvent::ClipboardChanged { mode, snapshot })
                    {
                        warn!(error = %err, "failed to emit clipboard snapshot event");
                    }
                }
                Err(e) => {
                    error!(error = %e, %mode, "failed to read clipboard");
                }
            },
            PlatformCommand::WriteClipboard { mode, snapshot } => {
                if let Err(e) = self.clipboard.write(mode, snapshot).await {
                    error!(error = %e, %mode, "failed to write clipboard");
                }
            }
        }
    }

    async fn stop_runtimes(&self) {
        for runtime in &self.runtimes {
            if let Err(e) = runtime.stop().await {
                error!(error = %e, "failed to stop watch runtime");
            }
        }
    }
}
