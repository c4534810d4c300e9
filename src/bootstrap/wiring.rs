//! Service wiring.
//!
//! Builds the full service graph: adapters, watchers, polling runtimes,
//! the platform event loop and the service facades. Everything is an
//! explicit instance owned by the returned handle; no global lookup.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sc_app::usecases::{StartWatchers, StartWatchersError, StopWatchers, StopWatchersError};
use sc_app::{AppearanceService, SystemClipboardService};
use sc_core::ports::{
    AppearanceSourcePort, ClipboardChangeHandler, ClipboardError, SystemClipboardPort,
    WatcherControlPort,
};
use sc_core::{NotificationBus, WatchConfig};
use sc_platform::adapters::appearance::{SettingsAppearanceSource, SettingsFeed};
use sc_platform::adapters::clipboard::SystemClipboard;
use sc_platform::adapters::ChannelWatcherControl;
use sc_platform::ipc::PlatformCommand;
use sc_platform::ports::WatcherRuntimePort;
use sc_platform::runtime::appearance::PreferenceWatcher;
use sc_platform::runtime::clipboard::ClipboardWatcher;
use sc_platform::runtime::{PlatformRuntime, PollingWatcherRuntime};

/// A fully wired sysclip instance.
///
/// The handle owns the platform event loop task and the watcher
/// lifecycle; the public services are consumed by the embedding shell.
pub struct Sysclip {
    pub clipboard: SystemClipboardService,
    pub appearance: AppearanceService,
    pub bus: Arc<NotificationBus>,
    watcher_control: Arc<dyn WatcherControlPort>,
    command_tx: mpsc::Sender<PlatformCommand>,
    runtime_task: JoinHandle<()>,
}

impl Sysclip {
    /// Start the watch runtimes. Idempotent.
    pub async fn start(&self) -> Result<(), StartWatchersError> {
        StartWatchers::new(self.watcher_control.clone())
            .execute()
            .await
    }

    /// Stop the watch runtimes. Idempotent; the event loop keeps serving
    /// reads and writes.
    pub async fn stop(&self) -> Result<(), StopWatchersError> {
        StopWatchers::new(self.watcher_control.clone())
            .execute()
            .await
    }

    /// Stop everything and wait for the event loop to exit.
    pub async fn shutdown(self) {
        let _ = self.stop().await;
        let _ = self.command_tx.send(PlatformCommand::Shutdown).await;
        let _ = self.runtime_task.await;
    }
}

/// Wire a sysclip instance against the OS backends.
///
/// Returns the handle plus the [`SettingsFeed`] the native layer uses to
/// report appearance preference changes. Must be called within a tokio
/// runtime; the platform event loop is spawned onto it.
pub fn build(config: WatchConfig) -> Result<(Sysclip, SettingsFeed), ClipboardError> {
    let clipboard = Arc::new(SystemClipboard::new()?);
    let (appearance, feed) = SettingsAppearanceSource::new();
    let sysclip = build_with(&config, clipboard, Arc::new(appearance), None);
    Ok((sysclip, feed))
}

/// Wire a sysclip instance against injected backends.
///
/// This is the seam tests and headless embeddings use: any
/// [`SystemClipboardPort`] and [`AppearanceSourcePort`] implementation
/// works, and an optional [`ClipboardChangeHandler`] receives each
/// coalesced snapshot. Must be called within a tokio runtime.
pub fn build_with(
    config: &WatchConfig,
    clipboard: Arc<dyn SystemClipboardPort>,
    appearance: Arc<dyn AppearanceSourcePort>,
    clipboard_handler: Option<Arc<dyn ClipboardChangeHandler>>,
) -> Sysclip {
    let bus = Arc::new(NotificationBus::new());
    let capacity = config.channel_capacity.max(1);

    let (event_tx, event_rx) = mpsc::channel(capacity);
    let (command_tx, command_rx) = mpsc::channel(16);

    let clipboard_watcher = Arc::new(ClipboardWatcher::new(
        clipboard.clone(),
        config.modes.clone(),
        event_tx.clone(),
    ));
    let preference_watcher = Arc::new(PreferenceWatcher::new(appearance.clone(), event_tx.clone()));

    let runtimes: Vec<Arc<dyn WatcherRuntimePort>> = vec![
        Arc::new(PollingWatcherRuntime::new(
            clipboard_watcher,
            config.poll_interval(),
        )),
        Arc::new(PollingWatcherRuntime::new(
            preference_watcher,
            config.poll_interval(),
        )),
    ];

    let runtime = PlatformRuntime::new(
        bus.clone(),
        clipboard.clone(),
        event_tx,
        event_rx,
        command_rx,
        runtimes,
        clipboard_handler,
    );
    let runtime_task = tokio::spawn(runtime.start());

    let watcher_control: Arc<dyn WatcherControlPort> =
        Arc::new(ChannelWatcherControl::new(command_tx.clone()));

    Sysclip {
        clipboard: SystemClipboardService::new(clipboard, bus.clone(), capacity),
        appearance: AppearanceService::new(appearance, bus.clone(), capacity),
        bus,
        watcher_control,
        command_tx,
        runtime_task,
    }
}
