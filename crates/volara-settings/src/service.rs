//! Sound-preference service wiring the store, resources, and notifier.
//!
//! # Design
//! - `SoundSettingsFacade` is the seam UI adapters program against.
//! - Operations are synchronous and run on the caller's thread; the service
//!   keeps no state beyond the overlay summary label.
//! - Reads never fail: unreadable or unrecognized values resolve through
//!   the documented defaults.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use volara_events::Event;

use crate::error::{SettingsError, SettingsResult};
use crate::keys;
use crate::model::{OverlayMode, SoundFlag, SoundSnapshot};
use crate::notify::ChangeNotifier;
use crate::resources::DeviceResources;
use crate::store::SettingsStore;

/// Abstraction over the sound-preference surface used by UI adapters.
pub trait SoundSettingsFacade: Send {
    /// Resolve the overlay mode currently in effect and synchronize the
    /// display summary to it.
    ///
    /// Unrecognized or absent codes resolve through the voice-capability
    /// default; this operation never fails.
    fn overlay_mode(&mut self) -> OverlayMode;

    /// Persist `mode`, synchronize the display summary, and announce the
    /// change on the notification channel.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when the store rejects the write;
    /// nothing is announced and the summary is left untouched.
    fn set_overlay_mode(&mut self, mode: OverlayMode) -> SettingsResult<()>;

    /// Handle a raw overlay-mode identifier picked from a list control.
    ///
    /// Unknown identifiers are ignored: nothing is persisted and no event
    /// is announced.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when a recognized identifier fails
    /// to persist.
    fn select_overlay_mode(&mut self, raw: &str) -> SettingsResult<()>;

    /// Resolve a boolean flag, defaulting to the flag's documented value
    /// when the store has no entry.
    fn flag(&self, flag: SoundFlag) -> bool;

    /// Persist a boolean flag as a 0/1 integer.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when the store rejects the write.
    fn set_flag(&self, flag: SoundFlag, enabled: bool) -> SettingsResult<()>;

    /// Handle a checkbox control toggle by persisting the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] when the store rejects the write.
    fn toggle_flag(&self, flag: SoundFlag, enabled: bool) -> SettingsResult<()>;

    /// Display label synchronized to the last-read or last-written overlay
    /// mode.
    fn overlay_summary(&self) -> Option<&str>;

    /// One coherent read of every sound preference.
    fn snapshot(&mut self) -> SoundSnapshot;
}

/// Production implementation backed by the host settings provider.
pub struct SoundSettingsService {
    store: Arc<dyn SettingsStore>,
    notifier: Arc<dyn ChangeNotifier>,
    resources: DeviceResources,
    overlay_summary: Option<String>,
}

impl SoundSettingsService {
    /// Wire the service to its host collaborators.
    #[must_use]
    pub const fn new(
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn ChangeNotifier>,
        resources: DeviceResources,
    ) -> Self {
        Self {
            store,
            notifier,
            resources,
            overlay_summary: None,
        }
    }

    /// Read an integer, treating backend failures as an absent value.
    fn read_int(&self, key: &'static str) -> Option<i32> {
        self.store.get_int(key).unwrap_or_else(|error| {
            warn!(key, %error, "settings store read failed, using default");
            None
        })
    }

    fn write_int(
        &self,
        operation: &'static str,
        key: &'static str,
        value: i32,
    ) -> SettingsResult<()> {
        self.store
            .put_int(key, value)
            .map_err(|source| SettingsError::Store {
                operation,
                key,
                source,
            })
    }

    /// Out-of-range codes leave the previous summary untouched.
    fn refresh_summary(&mut self, code: i32) {
        if let Some(label) = self.resources.overlay_label(code) {
            self.overlay_summary = Some(label.to_string());
        }
    }
}

impl SoundSettingsFacade for SoundSettingsService {
    fn overlay_mode(&mut self) -> OverlayMode {
        let stored = self
            .read_int(keys::MODE_VOLUME_OVERLAY)
            .and_then(OverlayMode::from_code);
        let mode = stored.unwrap_or_else(|| {
            OverlayMode::capability_default(self.resources.voice_capable())
        });
        self.refresh_summary(mode.code());
        mode
    }

    #[instrument(skip(self))]
    fn set_overlay_mode(&mut self, mode: OverlayMode) -> SettingsResult<()> {
        let code = mode.code();
        self.write_int("set_overlay_mode", keys::MODE_VOLUME_OVERLAY, code)?;
        self.refresh_summary(code);
        self.notifier.notify(Event::VolumeOverlayChanged { state: code });
        info!(mode = mode.as_str(), code, "volume overlay mode persisted");
        Ok(())
    }

    fn select_overlay_mode(&mut self, raw: &str) -> SettingsResult<()> {
        let Ok(mode) = raw.parse::<OverlayMode>() else {
            debug!(identifier = raw, "ignoring unknown overlay mode selection");
            return Ok(());
        };
        self.set_overlay_mode(mode)
    }

    fn flag(&self, flag: SoundFlag) -> bool {
        self.read_int(flag.key())
            .map_or(flag.default_enabled(), |value| value != 0)
    }

    fn set_flag(&self, flag: SoundFlag, enabled: bool) -> SettingsResult<()> {
        self.write_int("set_flag", flag.key(), i32::from(enabled))?;
        info!(flag = flag.control_id(), enabled, "sound flag persisted");
        Ok(())
    }

    fn toggle_flag(&self, flag: SoundFlag, enabled: bool) -> SettingsResult<()> {
        debug!(flag = flag.control_id(), enabled, "user toggled sound flag");
        self.set_flag(flag, enabled)
    }

    fn overlay_summary(&self) -> Option<&str> {
        self.overlay_summary.as_deref()
    }

    fn snapshot(&mut self) -> SoundSnapshot {
        let overlay_mode = self.overlay_mode();
        SoundSnapshot {
            overlay_mode,
            overlay_summary: self.overlay_summary.clone(),
            safe_headset_restore: self.flag(SoundFlag::SafeHeadsetRestore),
            volume_button_music_controls: self.flag(SoundFlag::VolumeButtonMusicControls),
        }
    }
}
