//! Use case for replacing the contents of a clipboard mode.

use std::sync::Arc;

use tracing::{debug_span, Instrument};

use sc_core::ports::{ClipboardError, SystemClipboardPort};
use sc_core::{ClipboardMode, ClipboardSnapshot};

/// Validates a snapshot and requests the OS clipboard be replaced.
///
/// A refusal by the OS surfaces as [`ClipboardError::ExternalResource`]
/// and is reported to the caller, never retried.
pub struct SetClipboardContent {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl SetClipboardContent {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(
        &self,
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        let span = debug_span!("usecase.set_clipboard.execute", %mode);

        async {
            if let Some(empty) = snapshot
                .representations
                .iter()
                .find(|r| r.mime().is_empty())
            {
                return Err(ClipboardError::MalformedPayload(format!(
                    "empty MIME type in representation of {} bytes",
                    empty.size_bytes()
                )));
            }

            self.clipboard.write(mode, snapshot).await
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::ClipboardPayload;
    use sc_platform::adapters::clipboard::InMemoryClipboard;

    #[tokio::test]
    async fn rejects_empty_mime_before_touching_the_clipboard() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let snapshot = ClipboardSnapshot {
            ts_ms: 0,
            representations: vec![raw_payload("", b"data")],
        };

        let err = SetClipboardContent::new(clipboard.clone())
            .execute(ClipboardMode::Clipboard, snapshot)
            .await
            .unwrap_err();
        assert!(matches!(err, ClipboardError::MalformedPayload(_)));

        let current = clipboard.read(ClipboardMode::Clipboard).await.unwrap();
        assert!(current.is_none(), "invalid snapshot must not be written");
    }

    #[tokio::test]
    async fn writes_valid_snapshot() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        SetClipboardContent::new(clipboard.clone())
            .execute(
                ClipboardMode::Clipboard,
                ClipboardSnapshot::now(vec![ClipboardPayload::text("hello")]),
            )
            .await
            .unwrap();

        let current = clipboard
            .read(ClipboardMode::Clipboard)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.text().as_deref(), Some("hello"));
    }

    // Bypasses constructor validation the way deserialized input does.
    fn raw_payload(mime: &str, data: &[u8]) -> ClipboardPayload {
        serde_json::from_value(serde_json::json!({ "mime": mime, "data": data })).unwrap()
    }
}
