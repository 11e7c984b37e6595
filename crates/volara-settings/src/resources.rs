//! Host-supplied display resources and device capabilities.

/// Display resources and capability flags supplied by the host shell.
///
/// Overlay labels are ordered by overlay code. Lookups past the end of the
/// label set resolve to `None`; stale host resources must not fault the
/// service.
#[derive(Debug, Clone)]
pub struct DeviceResources {
    overlay_labels: Vec<String>,
    voice_capable: bool,
}

impl DeviceResources {
    /// Bundle overlay display labels with the voice-capability flag.
    #[must_use]
    pub const fn new(overlay_labels: Vec<String>, voice_capable: bool) -> Self {
        Self {
            overlay_labels,
            voice_capable,
        }
    }

    /// Display label for the overlay `code`, when the host provides one.
    #[must_use]
    pub fn overlay_label(&self, code: i32) -> Option<&str> {
        let index = usize::try_from(code).ok()?;
        self.overlay_labels.get(index).map(String::as_str)
    }

    /// Whether the device supports voice calls.
    #[must_use]
    pub const fn voice_capable(&self) -> bool {
        self.voice_capable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["Single".into(), "Expandable".into()]
    }

    #[test]
    fn label_lookup_is_guarded() {
        let resources = DeviceResources::new(labels(), true);
        assert_eq!(resources.overlay_label(1), Some("Expandable"));
        assert_eq!(resources.overlay_label(2), None);
        assert_eq!(resources.overlay_label(-1), None);
    }

    #[test]
    fn reports_voice_capability() {
        assert!(DeviceResources::new(labels(), true).voice_capable());
        assert!(!DeviceResources::new(labels(), false).voice_capable());
    }
}
