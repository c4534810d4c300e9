//! OS clipboard backend.
//!
//! The general clipboard goes through `clipboard-rs`; the X11/Wayland
//! primary selection is only reachable through `arboard`'s Linux
//! extension, so Linux builds carry both. The find buffer is enumerated
//! for API completeness but no current backend reaches it.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, RustImageData};
use tokio::task::spawn_blocking;

use sc_core::ports::{ClipboardError, SystemClipboardPort};
use sc_core::{ClipboardMode, ClipboardPayload, ClipboardSnapshot, MimeType};

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    // Created lazily and kept alive: on X11 the selection contents live
    // only as long as the owning connection.
    #[cfg(target_os = "linux")]
    selection: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let context = ClipboardContext::new().map_err(|e| {
            ClipboardError::ExternalResource(format!("failed to create clipboard context: {e}"))
        })?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            #[cfg(target_os = "linux")]
            selection: Arc::new(Mutex::new(None)),
        })
    }

    fn external(err: impl std::fmt::Display) -> ClipboardError {
        ClipboardError::ExternalResource(err.to_string())
    }

    async fn read_general(&self) -> Result<Option<ClipboardSnapshot>, ClipboardError> {
        let inner = self.inner.clone();
        spawn_blocking(move || {
            let guard = inner.lock().unwrap_or_else(PoisonError::into_inner);

            let mut representations = Vec::new();

            if let Ok(files) = guard.get_files() {
                if !files.is_empty() {
                    representations.push(ClipboardPayload::uri_list(files));
                }
            }

            if let Ok(image) = guard.get_image() {
                let png = image.to_png().map_err(SystemClipboard::external)?;
                representations.push(ClipboardPayload::png(Bytes::from(
                    png.get_bytes().to_vec(),
                )));
            }

            if let Ok(text) = guard.get_text() {
                if !text.is_empty() {
                    representations.push(ClipboardPayload::text(text));
                }
            }

            if representations.is_empty() {
                Ok(None)
            } else {
                Ok(Some(ClipboardSnapshot::now(representations)))
            }
        })
        .await
        .map_err(Self::external)?
    }

    async fn write_general(&self, snapshot: ClipboardSnapshot) -> Result<(), ClipboardError> {
        let inner = self.inner.clone();
        spawn_blocking(move || {
            let guard = inner.lock().unwrap_or_else(PoisonError::into_inner);

            // The OS setters replace the whole clipboard, so the richest
            // supported representation wins: files > image > text.
            for wanted in [
                MimeType::text_uri_list(),
                MimeType::image_png(),
                MimeType::text_plain(),
            ] {
                let Some(payload) = snapshot
                    .representations
                    .iter()
                    .find(|r| r.mime() == &wanted)
                else {
                    continue;
                };

                return match wanted.0.as_str() {
                    "text/uri-list" => {
                        let text = String::from_utf8(payload.data().to_vec())
                            .map_err(|e| {
                                ClipboardError::MalformedPayload(format!(
                                    "uri list is not UTF-8: {e}"
                                ))
                            })?;
                        let files = text.lines().map(str::to_string).collect();
                        guard.set_files(files).map_err(SystemClipboard::external)
                    }
                    "image/png" => {
                        let image = RustImageData::from_bytes(payload.data()).map_err(|e| {
                            ClipboardError::MalformedPayload(format!("undecodable image: {e}"))
                        })?;
                        guard.set_image(image).map_err(SystemClipboard::external)
                    }
                    _ => {
                        let text = String::from_utf8(payload.data().to_vec()).map_err(|e| {
                            ClipboardError::MalformedPayload(format!("text is not UTF-8: {e}"))
                        })?;
                        guard.set_text(text).map_err(SystemClipboard::external)
                    }
                };
            }

            Err(ClipboardError::MalformedPayload(
                "no representation this backend can write".to_string(),
            ))
        })
        .await
        .map_err(Self::external)?
    }

    #[cfg(target_os = "linux")]
    async fn read_selection(&self) -> Result<Option<ClipboardSnapshot>, ClipboardError> {
        let selection = self.selection.clone();
        spawn_blocking(move || {
            let mut guard = selection.lock().unwrap_or_else(PoisonError::into_inner);
            let ctx = Self::selection_context(&mut guard)?;

            match ctx.get().clipboard(LinuxClipboardKind::Primary).text() {
                Ok(text) => Ok(Some(ClipboardSnapshot::now(vec![ClipboardPayload::text(
                    text,
                )]))),
                Err(arboard::Error::ContentNotAvailable) => Ok(None),
                Err(e) => Err(Self::external(e)),
            }
        })
        .await
        .map_err(Self::external)?
    }

    #[cfg(target_os = "linux")]
    async fn write_selection(&self, snapshot: ClipboardSnapshot) -> Result<(), ClipboardError> {
        let selection = self.selection.clone();
        spawn_blocking(move || {
            let text = snapshot.text().ok_or_else(|| {
                ClipboardError::MalformedPayload(
                    "selection mode only accepts a text/plain representation".to_string(),
                )
            })?;

            let mut guard = selection.lock().unwrap_or_else(PoisonError::into_inner);
            let ctx = Self::selection_context(&mut guard)?;

            ctx.set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text)
                .map_err(Self::external)
        })
        .await
        .map_err(Self::external)?
    }

    #[cfg(target_os = "linux")]
    fn selection_context<'a>(
        guard: &'a mut Option<arboard::Clipboard>,
    ) -> Result<&'a mut arboard::Clipboard, ClipboardError> {
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().map_err(Self::external)?);
        }
        guard.as_mut().ok_or_else(|| {
            ClipboardError::ExternalResource("selection context unavailable".to_string())
        })
    }
}

#[async_trait]
impl SystemClipboardPort for SystemClipboard {
    async fn read(
        &self,
        mode: ClipboardMode,
    ) -> Result<Option<ClipboardSnapshot>, ClipboardError> {
        match mode {
            ClipboardMode::Clipboard => self.read_general().await,
            #[cfg(target_os = "linux")]
            ClipboardMode::Selection => self.read_selection().await,
            other => Err(ClipboardError::UnsupportedMode(other)),
        }
    }

    async fn write(
        &self,
        mode: ClipboardMode,
        snapshot: ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        match mode {
            ClipboardMode::Clipboard => self.write_general(snapshot).await,
            #[cfg(target_os = "linux")]
            ClipboardMode::Selection => self.write_selection(snapshot).await,
            other => Err(ClipboardError::UnsupportedMode(other)),
        }
    }

    async fn clear(&self, mode: ClipboardMode) -> Result<(), ClipboardError> {
        match mode {
            ClipboardMode::Clipboard => {
                let inner = self.inner.clone();
                spawn_blocking(move || {
                    let guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.clear().map_err(SystemClipboard::external)
                })
                .await
                .map_err(Self::external)?
            }
            #[cfg(target_os = "linux")]
            ClipboardMode::Selection => {
                // arboard exposes no primary-selection clear; an empty
                // write is the closest equivalent.
                self.write_selection(ClipboardSnapshot::now(vec![ClipboardPayload::text("")]))
                    .await
            }
            other => Err(ClipboardError::UnsupportedMode(other)),
        }
    }

    fn supports(&self, mode: ClipboardMode) -> bool {
        match mode {
            ClipboardMode::Clipboard => true,
            ClipboardMode::Selection => cfg!(target_os = "linux"),
            ClipboardMode::FindBuffer => false,
        }
    }
}
