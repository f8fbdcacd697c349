//! Settings persistence error types.

use thiserror::Error;

/// Settings persistence error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SettingsError {
    #[error("failed to persist settings: {0}")]
    PersistFailed(String),

    #[error("settings change could not be delivered: receiver dropped")]
    Disconnected,
}
