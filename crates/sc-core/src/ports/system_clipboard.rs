//! System clipboard port - abstracts access to the OS clipboard.

use async_trait::async_trait;

use crate::clipboard::{ClipboardMode, ClipboardSnapshot};

use super::ClipboardError;

/// Platform-agnostic access to the OS clipboard.
///
/// The clipboard itself is owned by the OS and mutated by arbitrary
/// external processes; implementations hold no authoritative state, only
/// whatever caching the OS API forces on them. Concurrent writers follow
/// the OS contract (last write wins), which this port does not arbitrate.
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Snapshot the current contents of `mode`.
    ///
    /// `Ok(None)` means the clipboard is empty or holds no representation
    /// this backend can decode. Reading never mutates OS state.
    async fn read(&self, mode: ClipboardMode)
        -> Result<Option<ClipboardSnapshot>, ClipboardError>;

    /// Replace the contents of `mode` with `snapshot`.
    async fn write(
        &self,
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    ) -> Result<(), ClipboardError>;

    /// Clear `mode`, leaving it empty.
    async fn clear(&self, mode: ClipboardMode) -> Result<(), ClipboardError>;

    /// Whether `mode` exists on this platform with this backend.
    fn supports(&self, mode: ClipboardMode) -> bool;
}
