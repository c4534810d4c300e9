//! Watch runtimes and the platform event loop.

pub mod appearance;
pub mod clipboard;
pub mod event_bus;
pub mod polling;
#[allow(clippy::module_inception)]
pub mod runtime;

pub use polling::{PollingWatcherRuntime, WatchTask};
pub use runtime::PlatformRuntime;
