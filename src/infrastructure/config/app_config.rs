//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::ports::DEFAULT_THUMBNAIL_SIZE;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Smiley pack configuration.
    #[serde(default)]
    pub smileys: SmileyConfig,
}

/// Smiley pack configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmileyConfig {
    /// Descriptor of the current pack.
    #[serde(default = "default_pack")]
    pub pack: PathBuf,

    /// Directory holding one subdirectory per installed pack.
    #[serde(default = "default_packs_dir")]
    pub packs_dir: PathBuf,

    /// Thumbnail edge length in pixels.
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
}

impl Default for SmileyConfig {
    fn default() -> Self {
        Self {
            pack: default_pack(),
            packs_dir: default_packs_dir(),
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

fn default_pack() -> PathBuf {
    PathBuf::from("smileys/default/emoticons.xml")
}

fn default_packs_dir() -> PathBuf {
    PathBuf::from("smileys")
}

fn default_thumbnail_size() -> u32 {
    DEFAULT_THUMBNAIL_SIZE
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(packs_dir) = &args.packs_dir {
            self.smileys.packs_dir = packs_dir.clone();
        }
        if let Some(thumbnail_size) = args.thumbnail_size {
            self.smileys.thumbnail_size = thumbnail_size;
        }
    }
}
