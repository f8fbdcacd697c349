//! Persistent smiley settings.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::info;

use crate::domain::errors::SettingsError;
use crate::domain::ports::{SettingsEvent, SettingsPort};

use super::config::{AppConfig, StorageManager};

/// Settings backed by the configuration file.
///
/// Every pack change is written to disk and announced on the event channel.
pub struct SettingsStore {
    config: AppConfig,
    storage: StorageManager,
    event_tx: mpsc::UnboundedSender<SettingsEvent>,
}

impl SettingsStore {
    /// Creates a store persisting `config` through `storage`.
    #[must_use]
    pub fn new(
        config: AppConfig,
        storage: StorageManager,
        event_tx: &mpsc::UnboundedSender<SettingsEvent>,
    ) -> Self {
        Self {
            config,
            storage,
            event_tx: event_tx.clone(),
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl SettingsPort for SettingsStore {
    fn smiley_pack(&self) -> &Path {
        &self.config.smileys.pack
    }

    fn set_smiley_pack(&mut self, path: PathBuf) -> Result<(), SettingsError> {
        self.config.smileys.pack.clone_from(&path);
        self.storage
            .save_config(self.config.config.as_deref(), &self.config)
            .map_err(|e| SettingsError::PersistFailed(e.to_string()))?;
        info!(path = %path.display(), "Smiley pack selected");

        self.event_tx
            .send(SettingsEvent::SmileyPackChanged(path))
            .map_err(|_| SettingsError::Disconnected)
    }
}
