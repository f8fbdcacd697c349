//! Emoticon image handling.
//!
//! This module provides:
//! - PNG thumbnail encoding
//! - Per-pack memory caching of encoded thumbnails

pub mod memory_cache;
pub mod thumbnail;

pub use memory_cache::{CacheStats, EmoticonImageCache};
pub use thumbnail::PngThumbnailer;
