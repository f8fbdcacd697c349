//! Port definition for thumbnail encoding.

use crate::domain::errors::ImageError;

/// Default thumbnail edge length in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 16;

/// Port turning raw image bytes into a small PNG thumbnail.
///
/// `file` is only used to label errors.
#[cfg_attr(test, mockall::automock)]
pub trait ThumbnailPort: Send + Sync {
    /// Decodes `raw`, scales it to fit the thumbnail box and re-encodes it as PNG.
    ///
    /// # Errors
    /// Returns error if `raw` cannot be decoded or the thumbnail cannot be encoded.
    fn thumbnail(&self, file: &str, raw: &[u8]) -> Result<Vec<u8>, ImageError>;
}
