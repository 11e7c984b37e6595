//! Sticky event bus routing.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::{Receiver, Sender};

use crate::payloads::{Event, EventEnvelope, EventId};

/// Default buffer size for the live broadcast channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Shared sticky broadcast bus built on top of `tokio::broadcast`.
///
/// The latest envelope of each event kind is retained; a subscriber that
/// attaches after a publication receives the retained envelopes before any
/// live traffic. Slow subscribers may drop live events when the channel
/// overflows, but the retained envelopes are unaffected.
#[derive(Clone)]
pub struct EventBus {
    sender: Sender<EventEnvelope>,
    retained: Arc<Mutex<HashMap<&'static str, EventEnvelope>>>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    /// Construct a bus with a custom live-channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "event bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            retained: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Construct a bus with the default live-channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Publish a new event, assigning it a sequential identifier.
    ///
    /// The envelope replaces the retained entry for its kind and is then
    /// fanned out to live subscribers, if any.
    #[must_use]
    pub fn publish(&self, event: Event) -> EventId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };

        {
            let mut retained = self.lock_retained();
            retained.insert(envelope.event.kind(), envelope.clone());
        }

        let _ = self.sender.send(envelope);
        id
    }

    /// Subscribe to the bus, replaying the retained envelopes first.
    #[must_use]
    pub fn subscribe(&self) -> EventStream {
        let receiver = self.sender.subscribe();
        let mut backlog: Vec<EventEnvelope> = self.lock_retained().values().cloned().collect();
        backlog.sort_by_key(|envelope| envelope.id);
        let seen_through = backlog.last().map_or(0, |envelope| envelope.id);

        EventStream {
            backlog: backlog.into(),
            seen_through,
            receiver,
        }
    }

    /// The retained envelope for `kind`, if one has been published.
    #[must_use]
    pub fn last(&self, kind: &str) -> Option<EventEnvelope> {
        self.lock_retained().get(kind).cloned()
    }

    /// The most recently assigned identifier, if any events have been
    /// published.
    #[must_use]
    pub fn last_event_id(&self) -> Option<EventId> {
        self.lock_retained()
            .values()
            .map(|envelope| envelope.id)
            .max()
    }

    fn lock_retained(&self) -> MutexGuard<'_, HashMap<&'static str, EventEnvelope>> {
        self.retained
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream wrapper that yields the sticky backlog before live traffic.
pub struct EventStream {
    backlog: VecDeque<EventEnvelope>,
    seen_through: EventId,
    receiver: Receiver<EventEnvelope>,
}

impl EventStream {
    /// Receive the next event, respecting the sticky backlog first.
    ///
    /// Live envelopes already covered by the backlog snapshot are skipped so
    /// subscribers never observe the same id twice.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        if let Some(envelope) = self.backlog.pop_front() {
            return Some(envelope);
        }

        loop {
            match self.receiver.recv().await {
                Ok(envelope) if envelope.id <= self.seen_through => {}
                Ok(envelope) => return Some(envelope),
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let bus = EventBus::with_capacity(8);
        let first = bus.publish(Event::VolumeOverlayChanged { state: 0 });
        let second = bus.publish(Event::VolumeOverlayChanged { state: 1 });

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(bus.last_event_id(), Some(second));
    }

    #[tokio::test]
    async fn late_subscriber_observes_last_sent_value() {
        let bus = EventBus::new();
        let _ = bus.publish(Event::VolumeOverlayChanged { state: 0 });
        let last = bus.publish(Event::VolumeOverlayChanged { state: 3 });

        let mut stream = bus.subscribe();
        let envelope = stream.next().await.expect("sticky envelope");
        assert_eq!(envelope.id, last);
        assert_eq!(envelope.event, Event::VolumeOverlayChanged { state: 3 });
    }

    #[tokio::test]
    async fn live_subscriber_receives_subsequent_events() {
        let bus = EventBus::new();
        let mut stream = bus.subscribe();

        let id = bus.publish(Event::VolumeOverlayChanged { state: 2 });
        let envelope = stream.next().await.expect("live envelope");
        assert_eq!(envelope.id, id);
        assert_eq!(envelope.event, Event::VolumeOverlayChanged { state: 2 });
    }

    #[tokio::test]
    async fn retained_lookup_by_kind() {
        let bus = EventBus::new();
        assert!(bus.last("volume_overlay_changed").is_none());

        let _ = bus.publish(Event::VolumeOverlayChanged { state: 1 });
        let retained = bus
            .last("volume_overlay_changed")
            .expect("retained envelope");
        assert_eq!(retained.event, Event::VolumeOverlayChanged { state: 1 });
        assert!(bus.last("unknown_kind").is_none());
    }
}
