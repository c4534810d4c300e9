use std::sync::{Arc, Mutex, PoisonError};

use crate::event::ChangeEvent;

use super::stream::EventStream;
use super::subscription::{Subscription, SubscriptionId};

type ObserverFn = dyn Fn(&ChangeEvent) -> anyhow::Result<()> + Send + Sync;

#[derive(Clone)]
struct Entry {
    id: SubscriptionId,
    observer: Arc<ObserverFn>,
}

/// Live registrations, in registration order.
pub(crate) struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// In-process publish/subscribe delivering change events to observers.
///
/// Delivery is synchronous and follows registration order. A failing
/// observer is reported and skipped, never allowed to starve later
/// observers. The registry lock is never held across an observer call, so
/// observers may subscribe or unsubscribe from within a delivery.
pub struct NotificationBus {
    registry: Arc<Mutex<Registry>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                entries: Vec::new(),
            })),
        }
    }

    /// Register an observer. The returned handle owns the registration.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&ChangeEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.lock().entries.push(Entry {
            id,
            observer: Arc::new(observer),
        });
        Subscription::new(id, Arc::downgrade(&self.registry))
    }

    /// Remove a registration explicitly. Equivalent to dropping the handle.
    pub fn unsubscribe(&self, subscription: Subscription) {
        drop(subscription);
    }

    /// Deliver `event` to every observer registered at this point, in
    /// registration order.
    ///
    /// An observer removed while the delivery is in flight is not invoked
    /// again. Observer errors are logged and do not interrupt delivery.
    pub fn publish(&self, event: &ChangeEvent) {
        let snapshot: Vec<Entry> = self.lock().entries.clone();

        for entry in snapshot {
            if !self.lock().contains(entry.id) {
                continue;
            }
            if let Err(_err) = (entry.observer)(event) {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, ?event, "observer failed to handle change event");
            }
        }
    }

    /// Registration count, mainly for diagnostics and tests.
    pub fn subscriber_count(&self) -> usize {
        self.lock().entries.len()
    }

    /// A lazy, infinite sequence of every published event.
    ///
    /// Each call starts an independent stream; dropping it releases the
    /// underlying subscription. A consumer that stops polling misses
    /// events once its buffer of `capacity` fills.
    pub fn stream(&self, capacity: usize) -> EventStream {
        let (tx, rx) = tokio::sync::mpsc::channel(capacity);
        let subscription = self.subscribe(move |event| {
            // A closed receiver is a consumer on its way out, not a fault.
            if let Err(tokio::sync::mpsc::error::TrySendError::Full(_)) =
                tx.try_send(event.clone())
            {
                #[cfg(feature = "tracing")]
                tracing::warn!(?event, "event stream consumer lagging, dropping event");
            }
            Ok(())
        });
        EventStream::new(rx, subscription)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardMode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn clipboard_event() -> ChangeEvent {
        ChangeEvent::ClipboardChanged {
            mode: ClipboardMode::Clipboard,
        }
    }

    #[test]
    fn delivers_in_registration_order() {
        let bus = NotificationBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let order = order.clone();
            bus.subscribe(move |_| {
                order.lock().unwrap().push("first");
                Ok(())
            })
        };
        let second = {
            let order = order.clone();
            bus.subscribe(move |_| {
                order.lock().unwrap().push("second");
                Ok(())
            })
        };

        bus.publish(&clipboard_event());
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
        drop((first, second));
    }

    #[test]
    fn failing_observer_does_not_block_later_observers() {
        let bus = NotificationBus::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        let _failing = bus.subscribe(|_| Err(anyhow::anyhow!("observer exploded")));
        let _counting = {
            let delivered = delivered.clone();
            bus.subscribe(move |_| {
                delivered.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        };

        bus.publish(&clipboard_event());
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let bus = NotificationBus::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        let subscription = {
            let delivered = delivered.clone();
            bus.subscribe(move |_| {
                delivered.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        };

        bus.publish(&clipboard_event());
        drop(subscription);
        bus.publish(&clipboard_event());

        assert_eq!(delivered.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_during_delivery_skips_removed_observer() {
        let bus = Arc::new(NotificationBus::new());
        let second_called = Arc::new(AtomicUsize::new(0));

        // The first observer removes the second mid-delivery by dropping
        // its handle out of the shared slot.
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let _first = {
            let slot = slot.clone();
            bus.subscribe(move |_| {
                slot.lock().unwrap().take();
                Ok(())
            })
        };
        let second = {
            let second_called = second_called.clone();
            bus.subscribe(move |_| {
                second_called.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        };
        *slot.lock().unwrap() = Some(second);

        bus.publish(&clipboard_event());
        bus.publish(&clipboard_event());

        assert_eq!(second_called.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stream_receives_published_events() {
        let bus = NotificationBus::new();
        let mut stream = bus.stream(8);

        bus.publish(&clipboard_event());
        let event = stream.recv().await.unwrap();
        assert_eq!(event, clipboard_event());
    }
}
