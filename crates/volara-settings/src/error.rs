//! Error types for sound-preference operations.

use thiserror::Error;

use crate::store::StoreError;

/// Primary error type for sound-preference operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying settings-store operation failed.
    #[error("settings store operation failed")]
    Store {
        /// Operation identifier.
        operation: &'static str,
        /// Store key involved in the failure.
        key: &'static str,
        /// Source backend error.
        source: StoreError,
    },
}

/// Convenience alias for sound-preference results.
pub type SettingsResult<T> = Result<T, SettingsError>;
