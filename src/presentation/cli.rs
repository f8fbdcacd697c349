//! Command line front end.

use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::services::absolute_path;
use crate::application::{PackRegistry, PackReloader, SmileyPack};
use crate::domain::ports::SettingsPort;
use crate::infrastructure::{AppConfig, Command, SettingsStore, StorageManager};

/// Runs subcommands against the configured smiley pack.
pub struct CommandRunner {
    settings: SettingsStore,
    reloader: PackReloader,
    pack: SmileyPack,
}

impl CommandRunner {
    /// Creates a runner; no pack is loaded until a command needs one.
    #[must_use]
    pub fn new(config: AppConfig, storage: StorageManager) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let pack = SmileyPack::with_thumbnail_size(config.smileys.thumbnail_size);
        let settings = SettingsStore::new(config, storage, &event_tx);

        Self {
            settings,
            reloader: PackReloader::new(event_rx),
            pack,
        }
    }

    /// Returns the active pack.
    #[must_use]
    pub fn pack(&self) -> &SmileyPack {
        &self.pack
    }

    /// Executes `command`, writing its output to `out`.
    ///
    /// # Errors
    /// Returns error if a pack cannot be loaded, a token is unknown, the
    /// selection cannot be saved or `out` fails.
    pub fn run(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List { root, relative_to } => {
                self.list(root.as_deref(), relative_to.as_deref(), out)
            }
            Command::Render { pack, message } => {
                self.open(pack.as_deref())?;
                let rendered = self.pack.substitute(&message.join(" "));
                writeln!(out, "{rendered}")?;
                Ok(())
            }
            Command::Groups { pack, json } => {
                self.open(pack.as_deref())?;
                if *json {
                    let groups = serde_json::to_string_pretty(self.pack.emoticons())
                        .wrap_err("Failed to serialize emoticon groups")?;
                    writeln!(out, "{groups}")?;
                } else {
                    for group in self.pack.emoticons() {
                        writeln!(out, "{}", group.join(" "))?;
                    }
                }
                Ok(())
            }
            Command::Lookup { pack, token } => {
                self.open(pack.as_deref())?;
                let markup = self
                    .pack
                    .rich_text(token)
                    .wrap_err_with(|| format!("Cannot render {token:?}"))?;
                writeln!(out, "{markup}")?;
                writeln!(out, "{}", self.pack.icon_path(token).display())?;
                Ok(())
            }
            Command::Select { path } => self.select(path.clone(), out),
        }
    }

    fn list(
        &self,
        root: Option<&Path>,
        relative_to: Option<&Path>,
        out: &mut impl Write,
    ) -> Result<()> {
        let root = root.unwrap_or(self.settings.config().smileys.packs_dir.as_path());
        let base = match relative_to {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().wrap_err("Failed to determine current directory")?,
        };

        let current = self.settings.smiley_pack();
        for descriptor in PackRegistry::list_packs(root, &base) {
            let marker = if same_file(&base.join(&descriptor), current) { "*" } else { " " };
            writeln!(out, "{marker} {}", descriptor.display())?;
        }
        Ok(())
    }

    fn select(&mut self, path: PathBuf, out: &mut impl Write) -> Result<()> {
        self.settings
            .set_smiley_pack(path)
            .wrap_err("Failed to save smiley pack selection")?;

        match self.reloader.pump(&mut self.pack) {
            Some(Ok(())) => {
                writeln!(
                    out,
                    "Selected {} ({} emoticons)",
                    self.settings.smiley_pack().display(),
                    self.pack.emoticons().len()
                )?;
                Ok(())
            }
            Some(Err(e)) => Err(e).wrap_err("Selected pack could not be loaded"),
            None => Err(eyre!("Smiley pack change was not delivered")),
        }
    }

    fn open(&mut self, override_path: Option<&Path>) -> Result<()> {
        let path = override_path.unwrap_or_else(|| self.settings.smiley_pack()).to_path_buf();
        debug!(path = %path.display(), "Opening smiley pack");
        self.pack
            .load(&path)
            .wrap_err_with(|| format!("Failed to load smiley pack {}", path.display()))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    absolute_path(a) == absolute_path(b)
}
