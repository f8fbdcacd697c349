//! Infrastructure layer with filesystem, image and settings adapters.

/// Application configuration.
pub mod config;
/// Emoticon image encoding and caching.
pub mod image;
/// Persistent smiley settings.
pub mod settings;

pub use config::{AppConfig, CliArgs, Command, ConfigError, LogLevel, SmileyConfig, StorageManager};
pub use image::{CacheStats, EmoticonImageCache, PngThumbnailer};
pub use settings::SettingsStore;
