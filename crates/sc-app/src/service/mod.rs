//! Service facades consumed by the embedding shell.

mod appearance;
mod clipboard;

pub use appearance::{AppearanceService, PreferenceStream};
pub use clipboard::SystemClipboardService;
