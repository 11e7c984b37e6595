//! Seam over the platform settings provider.

use thiserror::Error;

/// Error raised by a settings-store backend.
///
/// Backends summarize the failure in a detail string; the service attaches
/// operation and key context when it propagates the error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{detail}")]
pub struct StoreError {
    detail: String,
}

impl StoreError {
    /// Wrap a backend failure description.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Key/value integer store supplied by the host platform.
///
/// Keys are the stable identifiers from [`crate::keys`]. Reads distinguish
/// absent keys from backend failures so callers can apply their defaults.
pub trait SettingsStore: Send + Sync {
    /// Fetch the integer stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn get_int(&self, key: &str) -> Result<Option<i32>, StoreError>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be written.
    fn put_int(&self, key: &str, value: i32) -> Result<(), StoreError>;
}
