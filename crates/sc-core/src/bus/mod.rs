//! In-process publish/subscribe for change events.
//!
//! The bus delivers [`ChangeEvent`](crate::event::ChangeEvent)s to
//! registered observers synchronously, in registration order, isolating one
//! observer's failure from the others. Subscriptions are disposable
//! handles: dropping one releases the registration on every exit path of
//! the owning scope.

mod notification_bus;
mod stream;
mod subscription;

pub use notification_bus::NotificationBus;
pub use stream::EventStream;
pub use subscription::{Subscription, SubscriptionId};
