//! Canonical resources and wired services for tests.

use std::sync::Arc;

use volara_settings::resources::DeviceResources;
use volara_settings::service::SoundSettingsService;

use crate::mocks::{MemoryStore, RecordingNotifier};

/// Display labels ordered by overlay code.
#[must_use]
pub fn overlay_labels() -> Vec<String> {
    ["Single", "Expandable", "Expanded", "No overlay"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Resources for a voice-capable handset.
#[must_use]
pub fn handset_resources() -> DeviceResources {
    DeviceResources::new(overlay_labels(), true)
}

/// Resources for a tablet without voice capability.
#[must_use]
pub fn tablet_resources() -> DeviceResources {
    DeviceResources::new(overlay_labels(), false)
}

/// Service wired to fresh fakes, returned alongside its collaborators.
#[must_use]
pub fn wired_service(
    resources: DeviceResources,
) -> (SoundSettingsService, Arc<MemoryStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = SoundSettingsService::new(store.clone(), notifier.clone(), resources);
    (service, store, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_overlay_code_order() {
        let labels = overlay_labels();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], "Single");
        assert_eq!(labels[2], "Expanded");
    }

    #[test]
    fn resource_fixtures_differ_only_in_voice_capability() {
        assert!(handset_resources().voice_capable());
        assert!(!tablet_resources().voice_capable());
    }
}
