//! Event and command types exchanged between the watch runtimes and the
//! platform event loop.

use sc_core::{ClipboardMode, ClipboardSnapshot, ColorPreference};

/// Events emitted by watchers and consumed by the platform runtime.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// The clipboard contents of `mode` changed. `None` means cleared.
    ClipboardChanged {
        mode: ClipboardMode,
        snapshot: Option<ClipboardSnapshot>,
    },
    /// The system appearance preference transitioned to `value`.
    PreferenceChanged { value: ColorPreference },
    Started,
    Stopped,
    Error { message: String },
}

/// Commands accepted by the platform runtime.
#[derive(Debug)]
pub enum PlatformCommand {
    Shutdown,
    StartWatchers,
    StopWatchers,
    ReadClipboard { mode: ClipboardMode },
    WriteClipboard {
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    },
}
