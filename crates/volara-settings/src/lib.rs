#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Sound-preference mapping and synchronization for the Volara shell.
//!
//! The crate translates between human-readable overlay-mode identifiers and
//! the integer codes persisted in the host settings provider, keeps the
//! display summary in sync with the persisted value, and announces overlay
//! changes on the shell notification bus. The store and the bus stay behind
//! seams so hosts and tests can substitute their own.
//!
//! Layout: `model.rs` (overlay modes, flags, snapshots), `keys.rs` (store
//! key identifiers), `store.rs` (settings-store seam), `resources.rs`
//! (display labels + device capabilities), `notify.rs` (change-notifier
//! seam), `service.rs` (`SoundSettingsFacade` + `SoundSettingsService`),
//! `error.rs` (error types).

pub mod error;
pub mod keys;
pub mod model;
pub mod notify;
pub mod resources;
pub mod service;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use model::{OverlayMode, ParseOverlayModeError, SoundFlag, SoundSnapshot};
pub use notify::ChangeNotifier;
pub use resources::DeviceResources;
pub use service::{SoundSettingsFacade, SoundSettingsService};
pub use store::{SettingsStore, StoreError};
