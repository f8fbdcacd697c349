//! Active smiley pack: token lookup, thumbnails and message substitution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::{EncodedImage, PackDescriptor};
use crate::domain::errors::{ImageError, LookupError, PackError};
use crate::domain::ports::ThumbnailPort;
use crate::infrastructure::image::{CacheStats, EmoticonImageCache, PngThumbnailer};

use super::descriptor_parser::DescriptorParser;
use super::pack_registry::absolute_path;
use super::word_tokenizer::rewrite_words;

/// The currently loaded emoticon pack.
///
/// Every [`SmileyPack::load`] discards the previous pack completely, even
/// when the new descriptor cannot be opened.
pub struct SmileyPack {
    path: Option<PathBuf>,
    assignments: HashMap<String, String>,
    emoticons: Vec<Vec<String>>,
    cache: EmoticonImageCache,
}

impl SmileyPack {
    /// Creates an empty pack that encodes thumbnails with `thumbnailer`.
    #[must_use]
    pub fn new(thumbnailer: Box<dyn ThumbnailPort>) -> Self {
        Self {
            path: None,
            assignments: HashMap::new(),
            emoticons: Vec::new(),
            cache: EmoticonImageCache::new(thumbnailer),
        }
    }

    /// Creates an empty pack producing PNG thumbnails of `size` pixels.
    #[must_use]
    pub fn with_thumbnail_size(size: u32) -> Self {
        Self::new(Box::new(PngThumbnailer::new(size)))
    }

    /// Replaces the current pack with the one described by `descriptor`.
    ///
    /// # Errors
    /// Returns error if the descriptor cannot be read. The previous pack is
    /// discarded regardless.
    pub fn load(&mut self, descriptor: &Path) -> Result<(), PackError> {
        self.clear();

        let bytes = std::fs::read(descriptor).map_err(|e| PackError::open(descriptor, e))?;
        let parsed = DescriptorParser::parse(&String::from_utf8_lossy(&bytes));

        let base = absolute_path(descriptor)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.install(parsed, base);
        info!(
            path = %descriptor.display(),
            tokens = self.assignments.len(),
            groups = self.emoticons.len(),
            "Loaded smiley pack"
        );
        Ok(())
    }

    /// Installs an already parsed descriptor whose images live in `base`.
    ///
    /// A relative `base` is resolved against the current directory.
    pub fn load_descriptor(&mut self, descriptor: PackDescriptor, base: &Path) {
        self.clear();
        self.install(descriptor, absolute_path(base));
    }

    fn install(&mut self, descriptor: PackDescriptor, base: PathBuf) {
        for entry in descriptor.entries {
            for token in &entry.tokens {
                // duplicates: last entry wins
                self.assignments.insert(token.clone(), entry.file.clone());
            }
            self.emoticons.push(entry.tokens);
        }
        self.cache.reset(Some(base.clone()));
        self.path = Some(base);
    }

    fn clear(&mut self) {
        self.assignments.clear();
        self.emoticons.clear();
        self.cache.reset(None);
        self.path = None;
    }

    /// Replaces every whole-word emoticon in `message` with inline image markup.
    ///
    /// Words whose image cannot be loaded are left as plain text.
    pub fn substitute(&mut self, message: &str) -> String {
        let Self {
            assignments, cache, ..
        } = self;

        rewrite_words(message, |word| {
            let file = assignments.get(word)?;
            match cache.resolve(file) {
                Ok(encoded) => Some(encoded.to_rich_text()),
                Err(e) => {
                    debug!(token = %word, file = %file, error = %e, "Emoticon image unavailable");
                    None
                }
            }
        })
        .into_owned()
    }

    /// Returns inline image markup for a single token.
    ///
    /// # Errors
    /// Returns error if the token is unknown or its image is unavailable.
    pub fn rich_text(&mut self, token: &str) -> Result<String, LookupError> {
        let file = self
            .assignments
            .get(token)
            .ok_or_else(|| LookupError::UnknownToken(token.to_owned()))?;
        let encoded = self.cache.resolve(file)?;
        Ok(encoded.to_rich_text())
    }

    /// Returns the encoded thumbnail of an image file of this pack.
    ///
    /// # Errors
    /// Returns error if no token maps to `file` or the image is unavailable.
    pub fn resolve(&mut self, file: &str) -> Result<EncodedImage, ImageError> {
        if !self.assignments.values().any(|mapped| mapped == file) {
            return Err(ImageError::not_in_pack(file));
        }
        self.cache.resolve(file)
    }

    /// Returns the on-disk image path for `token`, unscaled.
    ///
    /// Unknown tokens and an unloaded pack yield an empty path.
    #[must_use]
    pub fn icon_path(&self, token: &str) -> PathBuf {
        match (&self.path, self.assignments.get(token)) {
            (Some(base), Some(file)) => base.join(file),
            _ => PathBuf::new(),
        }
    }

    /// Returns the image file mapped to `token`.
    #[must_use]
    pub fn file_for(&self, token: &str) -> Option<&str> {
        self.assignments.get(token).map(String::as_str)
    }

    /// Returns true if `token` belongs to the loaded pack.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.assignments.contains_key(token)
    }

    /// Synonym groups in descriptor order, one per emoticon entry.
    #[must_use]
    pub fn emoticons(&self) -> &[Vec<String>] {
        &self.emoticons
    }

    /// Directory of the loaded pack.
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no pack is loaded or the pack declares no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns thumbnail cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for SmileyPack {
    fn default() -> Self {
        Self::new(Box::new(PngThumbnailer::default()))
    }
}

impl std::fmt::Debug for SmileyPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmileyPack")
            .field("path", &self.path)
            .field("tokens", &self.assignments.len())
            .field("groups", &self.emoticons.len())
            .finish_non_exhaustive()
    }
}
