use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use sc_core::ports::{ClipboardError, SystemClipboardPort};
use sc_core::{ClipboardMode, ClipboardSnapshot};

/// In-memory clipboard backend.
///
/// Serves tests and headless environments. External processes are played
/// by the `*_external` methods, which bypass the port the same way another
/// process bypasses this one entirely.
pub struct InMemoryClipboard {
    slots: Mutex<HashMap<ClipboardMode, ClipboardSnapshot>>,
    supported: Vec<ClipboardMode>,
    fail_next_write: AtomicBool,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::with_modes(vec![ClipboardMode::Clipboard, ClipboardMode::Selection])
    }

    pub fn with_modes(supported: Vec<ClipboardMode>) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            supported,
            fail_next_write: AtomicBool::new(false),
        }
    }

    /// Simulate an external process replacing the contents of `mode`.
    pub fn set_external(&self, mode: ClipboardMode, snapshot: ClipboardSnapshot) {
        self.lock().insert(mode, snapshot);
    }

    /// Simulate an external process clearing `mode`.
    pub fn clear_external(&self, mode: ClipboardMode) {
        self.lock().remove(&mode);
    }

    /// Make the next `write` fail as if the OS denied it.
    pub fn deny_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ClipboardMode, ClipboardSnapshot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_mode(&self, mode: ClipboardMode) -> Result<(), ClipboardError> {
        if self.supported.contains(&mode) {
            Ok(())
        } else {
            Err(ClipboardError::UnsupportedMode(mode))
        }
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemClipboardPort for InMemoryClipboard {
    async fn read(
        &self,
        mode: ClipboardMode,
    ) -> Result<Option<ClipboardSnapshot>, ClipboardError> {
        self.check_mode(mode)?;
        Ok(self.lock().get(&mode).cloned())
    }

    async fn write(
        &self,
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        self.check_mode(mode)?;

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

        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(ClipboardError::ExternalResource(
                "clipboard write denied by policy".to_string(),
            ));
        }

        self.lock().insert(mode, snapshot);
        Ok(())
    }

    async fn clear(&self, mode: ClipboardMode) -> Result<(), ClipboardError> {
        self.check_mode(mode)?;
        self.lock().remove(&mode);
        Ok(())
    }

    fn supports(&self, mode: ClipboardMode) -> bool {
        self.supported.contains(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::ClipboardPayload;

    #[tokio::test]
    async fn last_write_wins() {
        let clipboard = InMemoryClipboard::new();

        for content in ["first", "second", "third"] {
            clipboard
                .write(
                    ClipboardMode::Clipboard,
                    ClipboardSnapshot::now(vec![ClipboardPayload::text(content)]),
                )
                .await
                .unwrap();

            let current = clipboard
                .read(ClipboardMode::Clipboard)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(current.text().as_deref(), Some(content));
        }
    }

    #[tokio::test]
    async fn unsupported_mode_is_rejected() {
        let clipboard = InMemoryClipboard::with_modes(vec![ClipboardMode::Clipboard]);
        let err = clipboard.read(ClipboardMode::FindBuffer).await.unwrap_err();
        assert!(matches!(
            err,
            ClipboardError::UnsupportedMode(ClipboardMode::FindBuffer)
        ));
    }

    #[tokio::test]
    async fn denied_write_maps_to_external_resource_error() {
        let clipboard = InMemoryClipboard::new();
        clipboard.deny_next_write();

        let err = clipboard
            .write(
                ClipboardMode::Clipboard,
                ClipboardSnapshot::now(vec![ClipboardPayload::text("x")]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClipboardError::ExternalResource(_)));

        // The denial is one-shot; the next write goes through.
        clipboard
            .write(
                ClipboardMode::Clipboard,
                ClipboardSnapshot::now(vec![ClipboardPayload::text("x")]),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn modes_are_independent() {
        let clipboard = InMemoryClipboard::new();
        clipboard
            .write(
                ClipboardMode::Clipboard,
                ClipboardSnapshot::now(vec![ClipboardPayload::text("main")]),
            )
            .await
            .unwrap();
        clipboard
            .write(
                ClipboardMode::Selection,
                ClipboardSnapshot::now(vec![ClipboardPayload::text("primary")]),
            )
            .await
            .unwrap();

        let main = clipboard
            .read(ClipboardMode::Clipboard)
            .await
            .unwrap()
            .unwrap();
        let primary = clipboard
            .read(ClipboardMode::Selection)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(main.text().as_deref(), Some("main"));
        assert_eq!(primary.text().as_deref(), Some("primary"));
    }
}
