//! Ports implemented by the platform layer.
//!
//! Following the dependency inversion rule used across the workspace, the
//! low-level platform crate depends on these abstractions while the
//! application layer consumes them.

mod appearance;
mod change_handler;
mod errors;
mod system_clipboard;
pub mod watcher_control;

pub use appearance::AppearanceSourcePort;
pub use change_handler::ClipboardChangeHandler;
pub use errors::ClipboardError;
pub use system_clipboard::SystemClipboardPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
