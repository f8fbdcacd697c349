//! Emoticon image error types.

use thiserror::Error;

/// Reasons an emoticon image is unavailable.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ImageError {
    #[error("no smiley pack loaded")]
    NoPackLoaded,

    #[error("image {file} is not used by any emoticon of the pack")]
    NotInPack { file: String },

    #[error("failed to read image {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {file}: {message}")]
    Decode { file: String, message: String },

    #[error("failed to encode thumbnail for {file}: {message}")]
    Encode { file: String, message: String },
}

impl ImageError {
    /// Creates error for a file no token maps to.
    #[must_use]
    pub fn not_in_pack(file: impl Into<String>) -> Self {
        Self::NotInPack { file: file.into() }
    }

    /// Creates read error.
    #[must_use]
    pub fn read(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            file: file.into(),
            source,
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Creates encode error.
    #[must_use]
    pub fn encode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encode {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Returns whether the image file itself is missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
