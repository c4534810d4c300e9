//! Use cases orchestrating the core ports.

mod read_clipboard;
mod set_clipboard;
mod start_watchers;
mod stop_watchers;

pub use read_clipboard::ReadClipboardContent;
pub use set_clipboard::SetClipboardContent;
pub use start_watchers::{StartWatchers, StartWatchersError};
pub use stop_watchers::{StopWatchers, StopWatchersError};
