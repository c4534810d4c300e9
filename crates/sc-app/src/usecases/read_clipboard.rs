//! Use case for snapshotting a clipboard mode.

use std::sync::Arc;

use tracing::warn;

use sc_core::ports::SystemClipboardPort;
use sc_core::{ClipboardMode, ClipboardSnapshot};

/// Reads the current contents of a mode, keeping the common display path
/// simple: external failures are logged and mapped to `None`.
pub struct ReadClipboardContent {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl ReadClipboardContent {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(&self, mode: ClipboardMode) -> Option<ClipboardSnapshot> {
        match self.clipboard.read(mode).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, %mode, "clipboard read failed");
                None
            }
        }
    }
}
