//! Clipboard payload domain model
//!
//! One MIME-typed representation of clipboard content.

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use twox_hash::xxh3::hash64;

use super::MimeType;
use crate::ports::ClipboardError;

/// A single representation of clipboard content in one format.
///
/// The MIME type is guaranteed non-empty; construction through [`new`]
/// rejects payloads that would violate that.
///
/// [`new`]: ClipboardPayload::new
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClipboardPayload {
    mime: MimeType,
    #[serde(
        serialize_with = "serialize_bytes",
        deserialize_with = "deserialize_bytes"
    )]
    data: Bytes,
}

impl ClipboardPayload {
    pub fn new(mime: MimeType, data: Bytes) -> Result<Self, ClipboardError> {
        if mime.is_empty() {
            return Err(ClipboardError::MalformedPayload(
                "empty MIME type".to_string(),
            ));
        }
        Ok(Self { mime, data })
    }

    /// A `text/plain` payload with UTF-8 content.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            mime: MimeType::text_plain(),
            data: Bytes::from(content.into().into_bytes()),
        }
    }

    /// A `text/html` payload with UTF-8 markup.
    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            mime: MimeType::text_html(),
            data: Bytes::from(markup.into().into_bytes()),
        }
    }

    /// An `image/png` payload with encoded image bytes.
    pub fn png(bytes: Bytes) -> Self {
        Self {
            mime: MimeType::image_png(),
            data: bytes,
        }
    }

    /// A `text/uri-list` payload, one URI per line.
    pub fn uri_list(uris: Vec<String>) -> Self {
        Self {
            mime: MimeType::text_uri_list(),
            data: Bytes::from(uris.join("\n").into_bytes()),
        }
    }

    pub fn mime(&self) -> &MimeType {
        &self.mime
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Stable hash over MIME type and content, used for change coalescing.
    pub fn content_hash(&self) -> u64 {
        let mut buf = Vec::with_capacity(self.mime.0.len() + 1 + self.data.len());
        buf.extend_from_slice(self.mime.0.as_bytes());
        buf.push(0);
        buf.extend_from_slice(&self.data);
        hash64(&buf)
    }
}

fn serialize_bytes<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bytes(bytes)
}

fn deserialize_bytes<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Vec::<u8>::deserialize(deserializer)?;
    Ok(Bytes::from(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_rejects_empty_mime() {
        let err = ClipboardPayload::new(MimeType("".into()), Bytes::from_static(b"x"));
        assert!(matches!(err, Err(ClipboardError::MalformedPayload(_))));
    }

    #[test]
    fn text_payload_round_trip() {
        let payload = ClipboardPayload::text("hello");
        assert_eq!(payload.mime(), &MimeType::text_plain());
        assert_eq!(payload.data().as_ref(), b"hello");
    }

    #[test]
    fn content_hash_distinguishes_mime() {
        let mime = MimeType::from_str("application/x-custom").unwrap();
        let a = ClipboardPayload::text("hello");
        let b = ClipboardPayload::new(mime, Bytes::from_static(b"hello")).unwrap();
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn content_hash_stable_for_equal_content() {
        assert_eq!(
            ClipboardPayload::text("hello").content_hash(),
            ClipboardPayload::text("hello").content_hash()
        );
    }
}
