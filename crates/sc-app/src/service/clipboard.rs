//! System clipboard service.
//!
//! The one clipboard surface an application sees. Unlike toolkit
//! clipboards it keeps receiving updates while the application's windows
//! are unfocused, because the watch runtimes observe the OS resource
//! directly. Instances are injected by the top-level composition; there is
//! no process-global lookup.

use std::sync::Arc;

use tokio::sync::mpsc;

use sc_core::ports::{ClipboardError, SystemClipboardPort};
use sc_core::{
    ChangeEvent, ClipboardMode, ClipboardSnapshot, EventStream, NotificationBus, Subscription,
};

use crate::usecases::{ReadClipboardContent, SetClipboardContent};

pub struct SystemClipboardService {
    clipboard: Arc<dyn SystemClipboardPort>,
    bus: Arc<NotificationBus>,
    channel_capacity: usize,
}

impl SystemClipboardService {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        bus: Arc<NotificationBus>,
        channel_capacity: usize,
    ) -> Self {
        Self {
            clipboard,
            bus,
            channel_capacity,
        }
    }

    /// Non-blocking snapshot of `mode`. `None` when empty, unavailable or
    /// unreadable; failures are logged, not surfaced.
    pub async fn current(&self, mode: ClipboardMode) -> Option<ClipboardSnapshot> {
        ReadClipboardContent::new(self.clipboard.clone())
            .execute(mode)
            .await
    }

    /// The text content of `mode`, when a `text/plain` representation is
    /// present.
    pub async fn text(&self, mode: ClipboardMode) -> Option<String> {
        self.current(mode).await.and_then(|s| s.text())
    }

    /// Request the OS clipboard be replaced with `snapshot`.
    pub async fn set_current(
        &self,
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        SetClipboardContent::new(self.clipboard.clone())
            .execute(mode, snapshot)
            .await
    }

    /// Clear `mode`, leaving it empty.
    pub async fn clear(&self, mode: ClipboardMode) -> Result<(), ClipboardError> {
        self.clipboard.clear(mode).await
    }

    pub fn supports(&self, mode: ClipboardMode) -> bool {
        self.clipboard.supports(mode)
    }

    /// Register an observer for every change event. The registration is
    /// released when the returned handle drops.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&ChangeEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.bus.subscribe(observer)
    }

    /// A lazy, infinite sequence of change events for one mode.
    ///
    /// Each call starts an independent stream; any number may run at
    /// once and each can be dropped and restarted freely.
    pub fn on_change(&self, mode: ClipboardMode) -> EventStream {
        let (tx, rx) = mpsc::channel(self.channel_capacity.max(1));
        let subscription = self.bus.subscribe(move |event| {
            if matches!(event, ChangeEvent::ClipboardChanged { mode: m } if *m == mode) {
                let _ = tx.try_send(event.clone());
            }
            Ok(())
        });
        EventStream::new(rx, subscription)
    }
}
