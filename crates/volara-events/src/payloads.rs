//! Event payload types carried across the shell.

use chrono::{DateTime, Utc};

/// Identifier assigned to each event emitted by the bus.
pub type EventId = u64;

/// Typed notifications surfaced to shell components.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The volume-overlay style was changed by the user.
    VolumeOverlayChanged {
        /// Integer code persisted for the new overlay style.
        state: i32,
    },
}

impl Event {
    /// Machine-friendly discriminator; also the sticky-retention key.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::VolumeOverlayChanged { .. } => "volume_overlay_changed",
        }
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and
/// emission timestamp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct EventEnvelope {
    /// Sequential identifier assigned at publication.
    pub id: EventId,
    /// Wall-clock instant the event was published.
    pub timestamp: DateTime<Utc>,
    /// The event payload itself.
    pub event: Event,
}
