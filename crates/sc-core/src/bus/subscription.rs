use std::sync::{Mutex, PoisonError, Weak};

use uuid::Uuid;

use super::notification_bus::Registry;

/// Opaque identifier for one bus registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Handle to one registered observer.
///
/// The registration lives exactly as long as the handle: dropping it
/// removes the observer, so a subscription owned by a scope is released on
/// every exit path. An already-dropped bus makes drop a no-op.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<Mutex<Registry>>) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(self.id);
        }
    }
}
