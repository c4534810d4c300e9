//! Clipboard watcher
//!
//! Long-running observer of the OS clipboard. It periodically snapshots
//! each watched mode through [`SystemClipboardPort`], detects meaningful
//! changes by content hash, and emits `PlatformEvent::ClipboardChanged`
//! into the platform event loop.
//!
//! The watcher does not decide what a change means; it only translates
//! clipboard state transitions into structured events. Identical
//! consecutive contents are coalesced, so a burst of OS notifications for
//! the same content surfaces at most once per distinct content.
//!
//! ```text
//! OS clipboard -> SystemClipboardPort -> ClipboardWatcher -> PlatformEvent
//! ```
//!
//! `prime` records the starting state without emitting, so pre-existing
//! clipboard content never produces a change event at startup; callers
//! read the starting state directly instead.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};

use sc_core::ports::SystemClipboardPort;
use sc_core::ClipboardMode;

use crate::ipc::PlatformEvent;

use super::super::polling::WatchTask;

pub struct ClipboardWatcher<C>
where
    C: SystemClipboardPort + ?Sized,
{
    clipboard: Arc<C>,
    modes: Vec<ClipboardMode>,
    tx: mpsc::Sender<PlatformEvent>,
    /// Last observed content hash per mode; `None` means observed empty.
    last_hash: Mutex<HashMap<ClipboardMode, Option<u64>>>,
}

impl<C> ClipboardWatcher<C>
where
    C: SystemClipboardPort + ?Sized + 'static,
{
    pub fn new(clipboard: Arc<C>, modes: Vec<ClipboardMode>, tx: mpsc::Sender<PlatformEvent>) -> Self {
        Self {
            clipboard,
            modes,
            tx,
            last_hash: Mutex::new(HashMap::new()),
        }
    }

    /// Record the current contents of every watched mode without emitting.
    pub async fn prime_all(&self) -> Result<()> {
        for mode in self.watched_modes() {
            let snapshot = self.clipboard.read(mode).await?;
            let hash = snapshot.as_ref().map(|s| s.content_hash());
            self.last_hash.lock().await.insert(mode, hash);
        }
        Ok(())
    }

    /// Check one mode once.
    ///
    /// Idempotent and side-effect free when the content has not
    /// meaningfully changed.
    pub async fn check_once(&self, mode: ClipboardMode) -> Result<()> {
        let snapshot = self.clipboard.read(mode).await?;
        let hash = snapshot.as_ref().map(|s| s.content_hash());

        {
            let mut last = self.last_hash.lock().await;
            if last.get(&mode) == Some(&hash) {
                return Ok(());
            }
            last.insert(mode, hash);
        }

        self.tx
            .send(PlatformEvent::ClipboardChanged { mode, snapshot })
            .await?;

        Ok(())
    }

    fn watched_modes(&self) -> Vec<ClipboardMode> {
        self.modes
            .iter()
            .copied()
            .filter(|mode| self.clipboard.supports(*mode))
            .collect()
    }
}

#[async_trait]
impl<C> WatchTask for ClipboardWatcher<C>
where
    C: SystemClipboardPort + ?Sized + 'static,
{
    fn name(&self) -> &'static str {
        "clipboard"
    }

    async fn prime(&self) -> Result<()> {
        self.prime_all().await
    }

    async fn check(&self) -> Result<()> {
        for mode in self.watched_modes() {
            self.check_once(mode).await?;
        }
        Ok(())
    }
}
