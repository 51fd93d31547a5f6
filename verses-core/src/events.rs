//! Event bus for library notifications.

use tokio::sync::broadcast;
use verses_types::LibraryEvent;

/// Broadcast channel carrying [`LibraryEvent`]s to any number of subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<LibraryEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LibraryEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: LibraryEvent) {
        let receivers = self.tx.send(event).unwrap_or(0);
        tracing::trace!("Published library event to {} subscribers", receivers);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(32)
    }
}
