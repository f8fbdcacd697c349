//! PNG thumbnail encoder backed by the `image` crate.

use std::io::Cursor;

use image::ImageFormat;
use image::imageops::FilterType;
use tracing::trace;

use crate::domain::errors::ImageError;
use crate::domain::ports::{DEFAULT_THUMBNAIL_SIZE, ThumbnailPort};

/// Scales images to fit a square box and encodes them as PNG.
#[derive(Debug, Clone, Copy)]
pub struct PngThumbnailer {
    size: u32,
}

impl PngThumbnailer {
    /// Creates a thumbnailer fitting images into `size`×`size` pixels.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { size: size.max(1) }
    }

    /// Returns the thumbnail edge length.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }
}

impl Default for PngThumbnailer {
    fn default() -> Self {
        Self::new(DEFAULT_THUMBNAIL_SIZE)
    }
}

impl ThumbnailPort for PngThumbnailer {
    fn thumbnail(&self, file: &str, raw: &[u8]) -> Result<Vec<u8>, ImageError> {
        let img = image::load_from_memory(raw).map_err(|e| ImageError::decode(file, e.to_string()))?;

        // resize keeps the aspect ratio
        let scaled = img.resize(self.size, self.size, FilterType::Lanczos3);
        trace!(
            file = %file,
            width = scaled.width(),
            height = scaled.height(),
            "Scaled emoticon"
        );

        let mut buffer = Cursor::new(Vec::new());
        scaled
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ImageError::encode(file, e.to_string()))?;

        Ok(buffer.into_inner())
    }
}
