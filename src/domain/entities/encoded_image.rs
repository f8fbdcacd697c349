//! Encoded thumbnail value object.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A PNG thumbnail stored as standard base64 text.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    payload: String,
}

impl EncodedImage {
    /// Encodes raw PNG bytes.
    #[must_use]
    pub fn from_png(png: &[u8]) -> Self {
        Self {
            payload: STANDARD.encode(png),
        }
    }

    /// Returns the base64 payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.payload
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Inline rich-text markup embedding this image as a data URI.
    #[must_use]
    pub fn to_rich_text(&self) -> String {
        format!("<img src=\"data:image/png;base64,{}\">", self.payload)
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("len", &self.payload.len())
            .finish()
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_png_uses_padded_standard_alphabet() {
        let encoded = EncodedImage::from_png(&[0xfb, 0xff]);
        assert_eq!(encoded.as_str(), "+/8=");
    }

    #[test]
    fn test_rich_text_markup() {
        let encoded = EncodedImage::from_png(b"png");
        assert_eq!(
            encoded.to_rich_text(),
            "<img src=\"data:image/png;base64,cG5n\">"
        );
    }

    #[test]
    fn test_debug_hides_payload() {
        let encoded = EncodedImage::from_png(b"png");
        assert_eq!(format!("{encoded:?}"), "EncodedImage { len: 4 }");
    }
}
