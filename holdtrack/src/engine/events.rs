//! Outbound notifications.
//!
//! Notifications carry no state. Subscribers re-pull from a
//! [`super::HoldsView`] and must tolerate redundant or missed notifications:
//! a lagged receiver should treat the lag as a `HoldsChanged`.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldEvent {
    /// Something in the set of active holds changed.
    HoldsChanged,
    /// A hold point was configured in `slot`; its window may need opening.
    HoldPointAdded { slot: usize, name: String },
    /// A hold point was removed; its window should close.
    HoldPointRemoved { name: String },
}

/// Broadcast bus for [`HoldEvent`]s.
///
/// A subscription lasts as long as its receiver; dropping the receiver
/// unsubscribes.
#[derive(Debug, Clone)]
pub struct HoldEvents {
    tx: broadcast::Sender<HoldEvent>,
}

impl HoldEvents {
    /// Create a bus buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<HoldEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to current subscribers.
    ///
    /// Returns the number of subscribers reached; publishing with none is
    /// not an error.
    pub fn publish(&self, event: HoldEvent) -> usize {
        trace!(?event, "Publishing hold event");
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
