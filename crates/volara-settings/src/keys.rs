//! Store key identifiers shared with host settings providers.
//!
//! # Design
//! - Centralize the key strings so store backends and the service cannot
//!   drift apart.

/// Key holding the overlay-mode integer code.
pub const MODE_VOLUME_OVERLAY: &str = "mode_volume_overlay";

/// Key holding the safe-headset-volume-restore flag.
pub const SAFE_HEADSET_VOLUME_RESTORE: &str = "safe_headset_volume_restore";

/// Key holding the volume-button music-controls flag.
pub const VOLBTN_MUSIC_CONTROLS: &str = "volbtn_music_controls";
