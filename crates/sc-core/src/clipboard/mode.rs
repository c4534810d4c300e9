use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical clipboard instance.
///
/// Platforms expose a subset: every platform has `Clipboard`, X11/Wayland
/// additionally expose the primary `Selection`, and macOS has a separate
/// `FindBuffer` for the current search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardMode {
    Clipboard,
    Selection,
    FindBuffer,
}

impl ClipboardMode {
    pub fn all() -> [ClipboardMode; 3] {
        [
            ClipboardMode::Clipboard,
            ClipboardMode::Selection,
            ClipboardMode::FindBuffer,
        ]
    }
}

impl fmt::Display for ClipboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipboardMode::Clipboard => "clipboard",
            ClipboardMode::Selection => "selection",
            ClipboardMode::FindBuffer => "find-buffer",
        };
        write!(f, "{name}")
    }
}
