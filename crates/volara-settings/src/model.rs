//! Typed sound-preference models.
//!
//! # Design
//! - Pure data carriers used by the settings service and UI adapters.
//! - Overlay codes are fixed by the platform store schema; the numbering
//!   must not change.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys;

/// Visual style of the system volume-change indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverlayMode {
    /// A single slider for the active stream.
    Single,
    /// A single slider that can expand into the full stream list.
    Expandable,
    /// The full stream list, always expanded.
    Expanded,
    /// No overlay at all.
    None,
}

impl OverlayMode {
    /// Integer code persisted in the settings store.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Single => 0,
            Self::Expandable => 1,
            Self::Expanded => 2,
            Self::None => 3,
        }
    }

    /// Resolve a persisted code back to its mode.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Single),
            1 => Some(Self::Expandable),
            2 => Some(Self::Expanded),
            3 => Some(Self::None),
            _ => Option::None,
        }
    }

    /// Render the mode as its lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Expandable => "expandable",
            Self::Expanded => "expanded",
            Self::None => "none",
        }
    }

    /// Mode in effect when the store holds no recognizable code.
    ///
    /// Handsets keep the compact single slider; devices without voice
    /// capability get the expandable list.
    #[must_use]
    pub const fn capability_default(voice_capable: bool) -> Self {
        if voice_capable {
            Self::Single
        } else {
            Self::Expandable
        }
    }
}

impl FromStr for OverlayMode {
    type Err = ParseOverlayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "expandable" => Ok(Self::Expandable),
            "expanded" => Ok(Self::Expanded),
            "none" => Ok(Self::None),
            other => Err(ParseOverlayModeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error produced when an overlay-mode identifier is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown overlay mode '{value}'")]
pub struct ParseOverlayModeError {
    /// Identifier supplied by the caller.
    pub value: String,
}

/// Boolean sound preferences persisted as 0/1 integers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoundFlag {
    /// Cap and restore volume safely when a headset reconnects.
    SafeHeadsetRestore,
    /// Skip tracks with the volume buttons while the screen is off.
    VolumeButtonMusicControls,
}

impl SoundFlag {
    /// Store key the flag is persisted under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SafeHeadsetRestore => keys::SAFE_HEADSET_VOLUME_RESTORE,
            Self::VolumeButtonMusicControls => keys::VOLBTN_MUSIC_CONTROLS,
        }
    }

    /// Identifier UI adapters use for the matching checkbox control.
    #[must_use]
    pub const fn control_id(self) -> &'static str {
        match self {
            Self::SafeHeadsetRestore => "safe_headset_restore",
            Self::VolumeButtonMusicControls => "volbtn_music_controls",
        }
    }

    /// Resolve a UI control identifier back to its flag.
    #[must_use]
    pub fn from_control_id(id: &str) -> Option<Self> {
        match id {
            "safe_headset_restore" => Some(Self::SafeHeadsetRestore),
            "volbtn_music_controls" => Some(Self::VolumeButtonMusicControls),
            _ => None,
        }
    }

    /// Value assumed when the store has no entry for the flag.
    #[must_use]
    pub const fn default_enabled(self) -> bool {
        true
    }
}

/// One coherent read of every sound preference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoundSnapshot {
    /// Overlay style currently in effect.
    pub overlay_mode: OverlayMode,
    /// Display label resolved for the overlay style, when the host provides
    /// one.
    pub overlay_summary: Option<String>,
    /// Safe headset restore flag.
    pub safe_headset_restore: bool,
    /// Volume-button music controls flag.
    pub volume_button_music_controls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_codes_keep_store_schema_order() {
        assert_eq!(OverlayMode::Single.code(), 0);
        assert_eq!(OverlayMode::Expandable.code(), 1);
        assert_eq!(OverlayMode::Expanded.code(), 2);
        assert_eq!(OverlayMode::None.code(), 3);
    }

    #[test]
    fn overlay_code_round_trips() {
        for mode in [
            OverlayMode::Single,
            OverlayMode::Expandable,
            OverlayMode::Expanded,
            OverlayMode::None,
        ] {
            assert_eq!(OverlayMode::from_code(mode.code()), Some(mode));
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
        assert_eq!(OverlayMode::from_code(99), None);
        assert_eq!(OverlayMode::from_code(-1), None);
    }

    #[test]
    fn unknown_identifier_is_a_parse_error() {
        let error = "loud".parse::<OverlayMode>().expect_err("unknown id");
        assert_eq!(error.value, "loud");
    }

    #[test]
    fn capability_default_prefers_single_on_handsets() {
        assert_eq!(OverlayMode::capability_default(true), OverlayMode::Single);
        assert_eq!(
            OverlayMode::capability_default(false),
            OverlayMode::Expandable
        );
    }

    #[test]
    fn flag_keys_and_control_ids_round_trip() {
        for flag in [SoundFlag::SafeHeadsetRestore, SoundFlag::VolumeButtonMusicControls] {
            assert_eq!(SoundFlag::from_control_id(flag.control_id()), Some(flag));
            assert!(flag.default_enabled());
        }
        assert_eq!(
            SoundFlag::SafeHeadsetRestore.key(),
            keys::SAFE_HEADSET_VOLUME_RESTORE
        );
        assert_eq!(
            SoundFlag::VolumeButtonMusicControls.key(),
            keys::VOLBTN_MUSIC_CONTROLS
        );
        assert_eq!(SoundFlag::from_control_id("volume_panel"), None);
    }
}
