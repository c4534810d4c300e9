//! Normalized change events delivered to observers.

use serde::{Deserialize, Serialize};

use crate::appearance::ColorPreference;
use crate::clipboard::ClipboardMode;

/// A normalized external change, published through the
/// [`NotificationBus`](crate::bus::NotificationBus).
///
/// Clipboard events carry the mode only; observers read the current
/// contents on demand, which keeps delivery cheap and means a cleared
/// clipboard needs no special casing (the subsequent read returns `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    ClipboardChanged { mode: ClipboardMode },
    PreferenceChanged { value: ColorPreference },
}
