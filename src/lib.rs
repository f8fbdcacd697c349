//! smiley-pack - emoticon packs for chat clients.
//!
//! This crate loads `emoticons.xml` smiley packs, encodes their images as
//! small inline PNG thumbnails and replaces emoticon tokens in chat messages
//! with rich-text image markup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the smiley pack services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing image, config and settings adapters.
pub mod infrastructure;
/// Presentation layer containing the command line front end.
pub mod presentation;

pub use application::{PackRegistry, PackReloader, SmileyPack};

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "smiley-pack";
