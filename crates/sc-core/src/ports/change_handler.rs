//! Clipboard change handler port
//!
//! Callback interface through which the platform layer hands freshly read
//! clipboard snapshots to the application layer.

use anyhow::Result;

use crate::clipboard::{ClipboardMode, ClipboardSnapshot};

/// Callback handler for clipboard change events.
///
/// The platform layer calls this once per coalesced change; the snapshot
/// has already been read. `None` means the clipboard was cleared.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    async fn on_clipboard_changed(
        &self,
        mode: ClipboardMode,
        snapshot: Option<ClipboardSnapshot>,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_is_object_safe() {
        fn assert_object_safe(_trait_obj: &dyn ClipboardChangeHandler) {}
        let _ = assert_object_safe;
    }
}
