//! Seam over the shell notification channel.

use volara_events::{Event, EventBus};

/// Capability for announcing preference changes to the rest of the shell.
///
/// Delivery is fire-and-forget: implementations must not fail the caller
/// when nobody is subscribed.
pub trait ChangeNotifier: Send + Sync {
    /// Deliver `event` to interested subscribers.
    fn notify(&self, event: Event);
}

impl ChangeNotifier for EventBus {
    fn notify(&self, event: Event) {
        let _ = self.publish(event);
    }
}
