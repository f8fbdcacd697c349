//! In-memory cache of encoded emoticon thumbnails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::entities::EncodedImage;
use crate::domain::errors::ImageError;
use crate::domain::ports::ThumbnailPort;

/// Lazily encoded thumbnails keyed by image file name.
///
/// Entries live until the next [`EmoticonImageCache::reset`]; there is no
/// eviction and no size bound. Failed loads are not cached.
pub struct EmoticonImageCache {
    base: Option<PathBuf>,
    entries: HashMap<String, EncodedImage>,
    thumbnailer: Box<dyn ThumbnailPort>,
    hits: u64,
    misses: u64,
}

impl EmoticonImageCache {
    /// Creates an empty cache that encodes images with `thumbnailer`.
    #[must_use]
    pub fn new(thumbnailer: Box<dyn ThumbnailPort>) -> Self {
        Self {
            base: None,
            entries: HashMap::new(),
            thumbnailer,
            hits: 0,
            misses: 0,
        }
    }

    /// Drops every entry and resolves future files against `base`.
    pub fn reset(&mut self, base: Option<PathBuf>) {
        if !self.entries.is_empty() {
            debug!(count = self.entries.len(), "Cleared emoticon image cache");
        }
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
        self.base = base;
    }

    /// Directory image files are resolved against.
    #[must_use]
    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    /// Returns the encoded thumbnail for `file`, loading it on first use.
    ///
    /// # Errors
    /// Returns error if no pack directory is set or the image cannot be
    /// read, decoded or encoded. Nothing is cached in that case.
    pub fn resolve(&mut self, file: &str) -> Result<EncodedImage, ImageError> {
        if let Some(encoded) = self.entries.get(file) {
            self.hits += 1;
            trace!(file = %file, "Emoticon cache hit");
            return Ok(encoded.clone());
        }

        self.misses += 1;
        let base = self.base.as_deref().ok_or(ImageError::NoPackLoaded)?;
        let path = base.join(file);
        debug!(file = %file, path = %path.display(), "Loading emoticon image");

        let raw = std::fs::read(&path).map_err(|e| ImageError::read(file, e))?;
        let png = self.thumbnailer.thumbnail(file, &raw)?;
        let encoded = EncodedImage::from_png(&png);

        self.entries.insert(file.to_owned(), encoded.clone());
        Ok(encoded)
    }

    /// Returns the cached entry without loading.
    #[must_use]
    pub fn peek(&self, file: &str) -> Option<&EncodedImage> {
        self.entries.get(file)
    }

    /// Returns true if `file` has been encoded already.
    #[must_use]
    pub fn contains(&self, file: &str) -> bool {
        self.entries.contains_key(file)
    }

    /// Returns the number of cached thumbnails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            hit_rate,
            size: self.entries.len(),
        }
    }
}

impl std::fmt::Debug for EmoticonImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmoticonImageCache")
            .field("base", &self.base)
            .field("size", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached thumbnails.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} emoticons, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockThumbnailPort;
    use tempfile::TempDir;

    fn pack_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            std::fs::write(dir.path().join(file), b"raw").unwrap();
        }
        dir
    }

    #[test]
    fn test_resolve_encodes_once() {
        let dir = pack_dir(&["smile.png"]);
        let mut thumbnailer = MockThumbnailPort::new();
        thumbnailer
            .expect_thumbnail()
            .withf(|file, raw| file == "smile.png" && raw == b"raw")
            .times(1)
            .returning(|_, _| Ok(b"png".to_vec()));

        let mut cache = EmoticonImageCache::new(Box::new(thumbnailer));
        cache.reset(Some(dir.path().to_path_buf()));

        let first = cache.resolve("smile.png").unwrap();
        let second = cache.resolve("smile.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.as_str(), "cG5n");
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.size), (1, 1, 1));
    }

    #[test]
    fn test_missing_file_is_not_cached() {
        let dir = pack_dir(&[]);
        let mut thumbnailer = MockThumbnailPort::new();
        thumbnailer.expect_thumbnail().never();

        let mut cache = EmoticonImageCache::new(Box::new(thumbnailer));
        cache.reset(Some(dir.path().to_path_buf()));

        for _ in 0..2 {
            let err = cache.resolve("gone.png").unwrap_err();
            assert!(err.is_missing());
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_decode_failure_is_retried() {
        let dir = pack_dir(&["broken.png"]);
        let mut thumbnailer = MockThumbnailPort::new();
        thumbnailer
            .expect_thumbnail()
            .times(2)
            .returning(|file, _| Err(ImageError::decode(file, "bad header")));

        let mut cache = EmoticonImageCache::new(Box::new(thumbnailer));
        cache.reset(Some(dir.path().to_path_buf()));

        assert!(cache.resolve("broken.png").is_err());
        assert!(cache.resolve("broken.png").is_err());
        assert!(!cache.contains("broken.png"));
    }

    #[test]
    fn test_resolve_without_pack() {
        let mut cache = EmoticonImageCache::new(Box::new(MockThumbnailPort::new()));
        assert!(matches!(
            cache.resolve("smile.png"),
            Err(ImageError::NoPackLoaded)
        ));
    }

    #[test]
    fn test_reset_clears_entries() {
        let dir = pack_dir(&["smile.png"]);
        let mut thumbnailer = MockThumbnailPort::new();
        thumbnailer
            .expect_thumbnail()
            .returning(|_, _| Ok(b"png".to_vec()));

        let mut cache = EmoticonImageCache::new(Box::new(thumbnailer));
        cache.reset(Some(dir.path().to_path_buf()));
        cache.resolve("smile.png").unwrap();
        assert!(cache.peek("smile.png").is_some());

        cache.reset(None);

        assert!(cache.is_empty());
        assert!(cache.base().is_none());
        assert_eq!(cache.stats().misses, 0);
    }
}
