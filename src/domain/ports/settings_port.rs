//! Settings port definition.

use std::path::{Path, PathBuf};

use crate::domain::errors::SettingsError;

/// Change notifications emitted by a settings collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// The current smiley pack descriptor changed.
    SmileyPackChanged(PathBuf),
}

/// Port for the smiley pack selection stored in application settings.
pub trait SettingsPort {
    /// Returns the descriptor path of the current pack.
    fn smiley_pack(&self) -> &Path;

    /// Stores a new current pack and emits [`SettingsEvent::SmileyPackChanged`].
    ///
    /// # Errors
    /// Returns error if the selection cannot be persisted or nobody listens
    /// for change events.
    fn set_smiley_pack(&mut self, path: PathBuf) -> Result<(), SettingsError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use tokio::sync::mpsc;

    /// In-memory settings for testing.
    pub struct MockSettings {
        pack: PathBuf,
        events: mpsc::UnboundedSender<SettingsEvent>,
    }

    impl MockSettings {
        /// Creates mock settings pointing at `pack`.
        pub fn new(pack: impl Into<PathBuf>, events: mpsc::UnboundedSender<SettingsEvent>) -> Self {
            Self {
                pack: pack.into(),
                events,
            }
        }
    }

    impl SettingsPort for MockSettings {
        fn smiley_pack(&self) -> &Path {
            &self.pack
        }

        fn set_smiley_pack(&mut self, path: PathBuf) -> Result<(), SettingsError> {
            self.pack = path.clone();
            self.events
                .send(SettingsEvent::SmileyPackChanged(path))
                .map_err(|_| SettingsError::Disconnected)
        }
    }
}
