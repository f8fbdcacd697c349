use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "smiley-pack";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration persistence errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Reads and writes the configuration file.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the configuration file path, honouring an override.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        )
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults; a malformed file is left
    /// untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or created.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = self.config_path(path_override);

        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, creating default");
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Failed to parse config file, using defaults"
                );
                Ok(AppConfig::default())
            }
        }
    }

    /// Saves the application configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_config(
        &self,
        path_override: Option<&Path>,
        config: &AppConfig,
    ) -> Result<(), ConfigError> {
        let config_path = self.config_path(path_override);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::save_to_file(&config_path, config)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_config_creates_directory() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("smiley-pack");
        let manager = StorageManager::with_dir(config_dir.clone());

        assert!(!config_dir.exists());
        manager.save_config(None, &AppConfig::default()).unwrap();
        assert!(config_dir.join(CONFIG_FILE_NAME).is_file());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.smileys.thumbnail_size, 16);

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.smileys.thumbnail_size, 16);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.smileys.pack = PathBuf::from("/srv/smileys/cats/emoticons.xml");
        manager.save_config(None, &config).unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert_eq!(loaded.smileys, config.smileys);
    }

    #[test]
    fn test_path_override() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("nested").join("custom.toml");

        manager.load_config(Some(&custom)).unwrap();

        assert!(custom.exists());
        assert!(!manager.config_dir().exists());
    }
}
