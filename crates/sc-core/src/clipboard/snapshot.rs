use chrono::Utc;
use serde::{Deserialize, Serialize};
use twox_hash::xxh3::hash64;

use super::{ClipboardPayload, MimeType};

/// The full contents observed from (or destined for) one clipboard mode at
/// one instant, as a set of MIME-typed representations.
///
/// The service never owns the system clipboard; a snapshot is a cached
/// read-only copy taken at `ts_ms` (Unix milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardSnapshot {
    pub ts_ms: i64,
    pub representations: Vec<ClipboardPayload>,
}

impl ClipboardSnapshot {
    /// A snapshot timestamped with the current wall clock.
    pub fn now(representations: Vec<ClipboardPayload>) -> Self {
        Self {
            ts_ms: Utc::now().timestamp_millis(),
            representations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }

    pub fn representation_count(&self) -> usize {
        self.representations.len()
    }

    pub fn total_size_bytes(&self) -> usize {
        self.representations.iter().map(|r| r.size_bytes()).sum()
    }

    /// The raw bytes of the representation with the given MIME type, if any.
    pub fn data(&self, mime: &MimeType) -> Option<&bytes::Bytes> {
        self.representations
            .iter()
            .find(|r| r.mime() == mime)
            .map(|r| r.data())
    }

    /// The `text/plain` representation decoded as UTF-8.
    pub fn text(&self) -> Option<String> {
        self.data(&MimeType::text_plain())
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    /// Stable hash over all representations, used for change coalescing.
    ///
    /// The timestamp is deliberately excluded so that re-reading unchanged
    /// contents hashes identically.
    pub fn content_hash(&self) -> u64 {
        let mut buf = Vec::with_capacity(self.representations.len() * 8);
        for representation in &self.representations {
            buf.extend_from_slice(&representation.content_hash().to_le_bytes());
        }
        hash64(&buf)
    }
}
