use thiserror::Error;

use crate::clipboard::ClipboardMode;

/// Failures surfaced by clipboard operations.
///
/// External failures are transient by nature and never retried here;
/// whether to retry is the caller's judgment.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The OS refused to read or write the clipboard, e.g. under a
    /// sandboxing or focus-stealing policy.
    #[error("external clipboard resource refused access: {0}")]
    ExternalResource(String),

    /// The requested clipboard mode does not exist on this platform.
    #[error("clipboard mode {0} is not available on this platform")]
    UnsupportedMode(ClipboardMode),

    /// The payload violates a structural invariant, e.g. an empty MIME
    /// type on write.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Internal notification plumbing shut down underneath the caller.
    #[error("notification channel closed")]
    ChannelClosed,
}
