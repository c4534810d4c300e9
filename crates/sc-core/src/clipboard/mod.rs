//! Clipboard domain model: MIME types, modes, payloads and snapshots.

mod mime;
mod mode;
mod payload;
mod snapshot;

pub use mime::MimeType;
pub use mode::ClipboardMode;
pub use payload::ClipboardPayload;
pub use snapshot::ClipboardSnapshot;
