//! Appearance preference watcher.
//!
//! Same shape as the clipboard watcher, over a much simpler resource: a
//! single enumerated value. Emits `PlatformEvent::PreferenceChanged` only
//! on actual transitions, so a source that re-reports an unchanged value
//! produces nothing.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};

use sc_core::ports::AppearanceSourcePort;
use sc_core::ColorPreference;

use crate::ipc::PlatformEvent;

use super::super::polling::WatchTask;

pub struct PreferenceWatcher {
    source: Arc<dyn AppearanceSourcePort>,
    tx: mpsc::Sender<PlatformEvent>,
    last: Mutex<Option<ColorPreference>>,
}

impl PreferenceWatcher {
    pub fn new(source: Arc<dyn AppearanceSourcePort>, tx: mpsc::Sender<PlatformEvent>) -> Self {
        Self {
            source,
            tx,
            last: Mutex::new(None),
        }
    }

    /// Record the current preference without emitting.
    pub async fn prime_value(&self) {
        let current = self.source.current();
        *self.last.lock().await = Some(current);
    }

    /// Check the source once, emitting only on a transition.
    pub async fn check_once(&self) -> Result<()> {
        let current = self.source.current();

        {
            let mut last = self.last.lock().await;
            if *last == Some(current) {
                return Ok(());
            }
            *last = Some(current);
        }

        self.tx
            .send(PlatformEvent::PreferenceChanged { value: current })
            .await?;

        Ok(())
    }
}

#[async_trait]
impl WatchTask for PreferenceWatcher {
    fn name(&self) -> &'static str {
        "appearance"
    }

    async fn prime(&self) -> Result<()> {
        self.prime_value().await;
        Ok(())
    }

    async fn check(&self) -> Result<()> {
        self.check_once().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::appearance::InMemoryAppearanceSource;

    #[tokio::test]
    async fn unchanged_value_never_reemits() {
        let source = Arc::new(InMemoryAppearanceSource::new(ColorPreference::NoPreference));
        let (tx, mut rx) = mpsc::channel(8);
        let watcher = PreferenceWatcher::new(source.clone(), tx);
        watcher.prime_value().await;

        source.set(ColorPreference::PreferDark);
        watcher.check_once().await.unwrap();
        // The source keeps reporting dark; nothing new may surface.
        watcher.check_once().await.unwrap();
        watcher.check_once().await.unwrap();

        let event = rx.try_recv().unwrap();
        assert!(matches!(
            event,
            PlatformEvent::PreferenceChanged {
                value: ColorPreference::PreferDark
            }
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn transitions_each_emit() {
        let source = Arc::new(InMemoryAppearanceSource::new(ColorPreference::PreferLight));
        let (tx, mut rx) = mpsc::channel(8);
        let watcher = PreferenceWatcher::new(source.clone(), tx);
        watcher.prime_value().await;

        source.set(ColorPreference::PreferDark);
        watcher.check_once().await.unwrap();
        source.set(ColorPreference::PreferHighContrast);
        watcher.check_once().await.unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            PlatformEvent::PreferenceChanged {
                value: ColorPreference::PreferDark
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            PlatformEvent::PreferenceChanged {
                value: ColorPreference::PreferHighContrast
            }
        ));
    }
}
