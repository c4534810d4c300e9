use tokio::sync::mpsc;

use crate::event::ChangeEvent;

use super::subscription::Subscription;

/// A lazy, infinite sequence of change events backed by a bus
/// subscription.
///
/// `recv` suspends the caller until the next event is published. Dropping
/// the stream releases the subscription, so an abandoned consumer never
/// accumulates events.
pub struct EventStream {
    rx: mpsc::Receiver<ChangeEvent>,
    _subscription: Subscription,
}

impl EventStream {
    pub fn new(rx: mpsc::Receiver<ChangeEvent>, subscription: Subscription) -> Self {
        Self {
            rx,
            _subscription: subscription,
        }
    }

    /// The next event, or `None` once the publishing side is gone.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        self.rx.recv().await
    }

    /// Non-suspending variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<ChangeEvent> {
        self.rx.try_recv().ok()
    }
}
