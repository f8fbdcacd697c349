//! Token lookup error types.

use thiserror::Error;

use super::ImageError;

/// Failure to render a single emoticon token.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LookupError {
    #[error("unknown emoticon token: {0}")]
    UnknownToken(String),

    #[error("emoticon image unavailable: {0}")]
    ImageUnavailable(#[from] ImageError),
}

impl LookupError {
    /// Returns whether the token is not part of the loaded pack.
    #[must_use]
    pub const fn is_unknown_token(&self) -> bool {
        matches!(self, Self::UnknownToken(_))
    }
}
