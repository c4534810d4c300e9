//! Appearance preference service.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;

use sc_core::ports::AppearanceSourcePort;
use sc_core::{ChangeEvent, ColorPreference, NotificationBus, Subscription};

pub struct AppearanceService {
    source: Arc<dyn AppearanceSourcePort>,
    bus: Arc<NotificationBus>,
    channel_capacity: usize,
}

impl AppearanceService {
    pub fn new(
        source: Arc<dyn AppearanceSourcePort>,
        bus: Arc<NotificationBus>,
        channel_capacity: usize,
    ) -> Self {
        Self {
            source,
            bus,
            channel_capacity,
        }
    }

    /// The system-wide color preference. Non-blocking snapshot.
    pub fn system_preference(&self) -> ColorPreference {
        self.source.current()
    }

    /// A lazy, infinite sequence of preference values.
    ///
    /// The then-current value is delivered synchronously before the call
    /// returns, so a subscriber can never miss the starting state; after
    /// that, only actual transitions are delivered. Restartable: every
    /// call begins a fresh stream.
    pub fn on_preference_change(&self) -> PreferenceStream {
        let (tx, rx) = mpsc::channel(self.channel_capacity.max(1));

        let initial = self.system_preference();
        let _ = tx.try_send(initial);

        // Transitions are deduplicated per stream so a change event racing
        // the initial read never produces a duplicate.
        let last = Mutex::new(initial);
        let subscription = self.bus.subscribe(move |event| {
            if let ChangeEvent::PreferenceChanged { value } = event {
                let mut last = last.lock().unwrap_or_else(PoisonError::into_inner);
                if *last != *value {
                    *last = *value;
                    let _ = tx.try_send(*value);
                }
            }
            Ok(())
        });

        PreferenceStream::new(rx, subscription)
    }

    /// Register an observer for raw change events.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&ChangeEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.bus.subscribe(observer)
    }
}

/// Lazy, infinite sequence of preference values backed by a bus
/// subscription. Dropping the stream releases the subscription.
pub struct PreferenceStream {
    rx: mpsc::Receiver<ColorPreference>,
    _subscription: Subscription,
}

impl PreferenceStream {
    fn new(rx: mpsc::Receiver<ColorPreference>, subscription: Subscription) -> Self {
        Self {
            rx,
            _subscription: subscription,
        }
    }

    /// The next value, or `None` once the publishing side is gone.
    pub async fn recv(&mut self) -> Option<ColorPreference> {
        self.rx.recv().await
    }

    /// Non-suspending variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<ColorPreference> {
        self.rx.try_recv().ok()
    }
}
