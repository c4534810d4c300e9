//! # sysclip
//!
//! Cross-process system clipboard synchronization and appearance
//! preference watching.
//!
//! sysclip observes two external, shared, mutable system resources (the OS
//! clipboard and the OS appearance preference), normalizes their change
//! notifications and delivers them to in-process observers with no missed
//! or duplicated events. It renders nothing and owns no windows; GUI
//! shells embed it and consume its services.
//!
//! ## Quick start
//!
//! ```no_run
//! use sysclip::bootstrap;
//! use sysclip::{ClipboardMode, WatchConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! bootstrap::init_tracing_subscriber()?;
//!
//! let (sysclip, _feed) = bootstrap::build(WatchConfig::default())?;
//! sysclip.start().await?;
//!
//! // Read the starting state once, then follow changes.
//! println!("{:?}", sysclip.clipboard.text(ClipboardMode::Clipboard).await);
//! let mut changes = sysclip.clipboard.on_change(ClipboardMode::Clipboard);
//! while let Some(event) = changes.recv().await {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;

pub use bootstrap::Sysclip;

// Re-export the service surface and domain types.
pub use sc_app::{AppearanceService, PreferenceStream, SystemClipboardService};
pub use sc_core::{
    ChangeEvent, ClipboardError, ClipboardMode, ClipboardPayload, ClipboardSnapshot,
    ColorPreference, EventStream, MimeType, NotificationBus, Subscription, WatchConfig,
};
pub use sc_platform::adapters::appearance::SettingsFeed;
