//! Fake collaborators for exercising the sound-preference service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use volara_events::Event;
use volara_settings::notify::ChangeNotifier;
use volara_settings::store::{SettingsStore, StoreError};

/// In-memory settings store with switchable fault injection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, i32>>,
    read_failure: AtomicBool,
    write_failure: AtomicBool,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `entries`.
    #[must_use]
    pub fn seeded(entries: &[(&str, i32)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.lock_values();
            for (key, value) in entries {
                values.insert((*key).to_string(), *value);
            }
        }
        store
    }

    /// Current value persisted under `key`, if any.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<i32> {
        self.lock_values().get(key).copied()
    }

    /// Number of persisted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_values().len()
    }

    /// Whether nothing has been persisted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_values().is_empty()
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.read_failure.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail.
    pub fn fail_writes(&self, fail: bool) {
        self.write_failure.store(fail, Ordering::SeqCst);
    }

    fn lock_values(&self) -> MutexGuard<'_, HashMap<String, i32>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SettingsStore for MemoryStore {
    fn get_int(&self, key: &str) -> Result<Option<i32>, StoreError> {
        if self.read_failure.load(Ordering::SeqCst) {
            return Err(StoreError::new("injected read failure"));
        }
        Ok(self.lock_values().get(key).copied())
    }

    fn put_int(&self, key: &str, value: i32) -> Result<(), StoreError> {
        if self.write_failure.load(Ordering::SeqCst) {
            return Err(StoreError::new("injected write failure"));
        }
        self.lock_values().insert(key.to_string(), value);
        Ok(())
    }
}

/// Notifier that records every announced event.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    /// Notifier with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events observed so far, in announcement order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.lock_events().clone()
    }

    fn lock_events(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.lock_events().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_are_visible() {
        let store = MemoryStore::seeded(&[("mode_volume_overlay", 2)]);
        assert_eq!(store.value("mode_volume_overlay"), Some(2));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn fault_injection_switches_read_and_write_paths() {
        let store = MemoryStore::new();
        store.fail_reads(true);
        assert!(store.get_int("mode_volume_overlay").is_err());
        store.fail_reads(false);
        assert_eq!(store.get_int("mode_volume_overlay"), Ok(None));

        store.fail_writes(true);
        assert!(store.put_int("mode_volume_overlay", 1).is_err());
        assert!(store.is_empty());
        store.fail_writes(false);
        store
            .put_int("mode_volume_overlay", 1)
            .expect("write should succeed");
        assert_eq!(store.value("mode_volume_overlay"), Some(1));
    }

    #[test]
    fn recording_notifier_keeps_announcement_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Event::VolumeOverlayChanged { state: 1 });
        notifier.notify(Event::VolumeOverlayChanged { state: 3 });
        assert_eq!(
            notifier.events(),
            vec![
                Event::VolumeOverlayChanged { state: 1 },
                Event::VolumeOverlayChanged { state: 3 },
            ]
        );
    }
}
