//! Applies settings change events to the active smiley pack.

use std::path::PathBuf;

use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::domain::errors::PackError;
use crate::domain::ports::SettingsEvent;

use super::smiley_pack::SmileyPack;

/// Owns the receiving end of the settings channel and reloads packs.
pub struct PackReloader {
    events: mpsc::UnboundedReceiver<SettingsEvent>,
    disconnected: bool,
}

impl PackReloader {
    /// Creates a reloader draining `events`.
    #[must_use]
    pub fn new(events: mpsc::UnboundedReceiver<SettingsEvent>) -> Self {
        Self {
            events,
            disconnected: false,
        }
    }

    /// Returns true once every settings sender has been dropped.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    /// Drains pending events and reloads `pack` once with the latest selection.
    ///
    /// Returns `None` when no pack change was pending.
    pub fn pump(&mut self, pack: &mut SmileyPack) -> Option<Result<(), PackError>> {
        let mut latest: Option<PathBuf> = None;
        loop {
            match self.events.try_recv() {
                Ok(SettingsEvent::SmileyPackChanged(path)) => {
                    if let Some(skipped) = latest.replace(path) {
                        debug!(path = %skipped.display(), "Superseded smiley pack change");
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }

        let path = latest?;
        let result = pack.load(&path);
        if let Err(e) = &result {
            warn!(error = %e, "Failed to reload smiley pack");
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SettingsPort;
    use crate::domain::ports::mocks::MockSettings;
    use std::fs;
    use tempfile::TempDir;

    fn write_pack(dir: &std::path::Path, token: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let descriptor = dir.join("emoticons.xml");
        fs::write(
            &descriptor,
            format!(r#"<map><emoticon file="a.png"><string>{token}</string></emoticon></map>"#),
        )
        .unwrap();
        descriptor
    }

    #[test]
    fn test_pump_without_events() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut reloader = PackReloader::new(rx);
        let mut pack = SmileyPack::default();

        assert!(reloader.pump(&mut pack).is_none());
        assert!(!reloader.is_disconnected());
    }

    #[test]
    fn test_settings_change_reloads_latest_pack() {
        let tmp = TempDir::new().unwrap();
        let first = write_pack(&tmp.path().join("first"), ":)");
        let second = write_pack(&tmp.path().join("second"), ";)");

        let (tx, rx) = mpsc::unbounded_channel();
        let mut settings = MockSettings::new(&first, tx);
        let mut reloader = PackReloader::new(rx);
        let mut pack = SmileyPack::default();
        pack.load(settings.smiley_pack()).unwrap();

        settings.set_smiley_pack(first.clone()).unwrap();
        settings.set_smiley_pack(second.clone()).unwrap();

        assert!(matches!(reloader.pump(&mut pack), Some(Ok(()))));
        assert!(pack.contains(";)"));
        assert!(!pack.contains(":)"));
        assert!(reloader.pump(&mut pack).is_none());
    }

    #[test]
    fn test_failed_reload_is_reported() {
        let tmp = TempDir::new().unwrap();
        let good = write_pack(&tmp.path().join("good"), ":)");
        let (tx, rx) = mpsc::unbounded_channel();
        let mut reloader = PackReloader::new(rx);
        let mut pack = SmileyPack::default();
        pack.load(&good).unwrap();

        tx.send(SettingsEvent::SmileyPackChanged(tmp.path().join("gone.xml")))
            .unwrap();
        drop(tx);

        assert!(matches!(reloader.pump(&mut pack), Some(Err(_))));
        assert!(pack.is_empty());
        assert!(reloader.is_disconnected());
    }
}
