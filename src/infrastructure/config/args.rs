use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "smiley-pack",
    version,
    about = "Inspect emoticon packs and render smileys into chat messages",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding installed smiley packs.
    #[arg(long, value_name = "DIR", global = true)]
    pub packs_dir: Option<PathBuf>,

    /// Thumbnail edge length in pixels.
    #[arg(long, value_name = "PX", global = true)]
    pub thumbnail_size: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List installed smiley packs.
    List {
        /// Packs directory, overrides the configured one.
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Print paths relative to this directory instead of the current one.
        #[arg(long, value_name = "DIR")]
        relative_to: Option<PathBuf>,
    },

    /// Replace emoticons in a message with inline images.
    Render {
        /// Pack descriptor, overrides the current pack.
        #[arg(long, value_name = "PATH")]
        pack: Option<PathBuf>,

        /// Message words, joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Print the emoticons of a pack grouped by image.
    Groups {
        /// Pack descriptor, overrides the current pack.
        #[arg(long, value_name = "PATH")]
        pack: Option<PathBuf>,

        /// Print JSON instead of one group per line.
        #[arg(long)]
        json: bool,
    },

    /// Show the inline image and icon path of a single emoticon.
    Lookup {
        /// Pack descriptor, overrides the current pack.
        #[arg(long, value_name = "PATH")]
        pack: Option<PathBuf>,

        /// Emoticon token, e.g. ":)".
        token: String,
    },

    /// Make a pack the current one.
    Select {
        /// Pack descriptor to select.
        path: PathBuf,
    },
}
