//! Presentation layer with the command line front end.

/// Subcommand execution.
pub mod cli;

pub use cli::CommandRunner;
