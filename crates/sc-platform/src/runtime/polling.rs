//! Polling watch runtime.
//!
//! Drives a [`WatchTask`] on a fixed interval in a background task.
//! Polling is the default observation strategy for portability; an
//! event-driven runtime backed by native change notifications can replace
//! this without changing upper layers.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::{sync::Mutex, task::JoinHandle, time::interval};
use tracing::warn;

use crate::ports::WatcherRuntimePort;

/// One pollable observation task.
#[async_trait]
pub trait WatchTask: Send + Sync + 'static {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Record the current external state without emitting events.
    async fn prime(&self) -> Result<()>;

    /// Observe once, emitting events for meaningful changes.
    async fn check(&self) -> Result<()>;
}

pub struct PollingWatcherRuntime<W>
where
    W: WatchTask,
{
    task: Arc<W>,
    poll_interval: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<W> PollingWatcherRuntime<W>
where
    W: WatchTask,
{
    pub fn new(task: Arc<W>, poll_interval: Duration) -> Self {
        Self {
            task,
            poll_interval,
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<W> WatcherRuntimePort for PollingWatcherRuntime<W>
where
    W: WatchTask,
{
    async fn start(&self) -> Result<()> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(()); // idempotent
        }

        let task = self.task.clone();
        let poll_interval = self.poll_interval;

        let handle = tokio::spawn(async move {
            if let Err(err) = task.prime().await {
                warn!(watcher = task.name(), error = ?err, "failed to prime watcher");
            }

            let mut ticker = interval(poll_interval);
            ticker.tick().await; // the first tick fires immediately

            loop {
                ticker.tick().await;

                if let Err(err) = task.check().await {
                    warn!(watcher = task.name(), error = ?err, "watch check failed");
                }
            }
        });

        *self.handle.lock().await = Some(handle);

        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort(); // a polling loop is safe to abort between ticks
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct CountingTask {
        primed: AtomicUsize,
        checked: AtomicUsize,
    }

    #[async_trait]
    impl WatchTask for CountingTask {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn prime(&self) -> Result<()> {
            self.primed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn check(&self) -> Result<()> {
            self.checked.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn start_is_idempotent_and_primes_once() {
        let task = Arc::new(CountingTask {
            primed: AtomicUsize::new(0),
            checked: AtomicUsize::new(0),
        });
        let runtime = PollingWatcherRuntime::new(task.clone(), Duration::from_millis(5));

        runtime.start().await.unwrap();
        runtime.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;
        runtime.stop().await.unwrap();
        runtime.stop().await.unwrap();

        assert_eq!(task.primed.load(Ordering::SeqCst), 1);
        assert!(task.checked.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn stop_halts_polling() {
        let task = Arc::new(CountingTask {
            primed: AtomicUsize::new(0),
            checked: AtomicUsize::new(0),
        });
        let runtime = PollingWatcherRuntime::new(task.clone(), Duration::from_millis(5));

        runtime.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        runtime.stop().await.unwrap();

        let at_stop = task.checked.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(task.checked.load(Ordering::SeqCst), at_stop);
    }
}
