//! Application layer with the smiley pack services.

/// Pack loading, discovery and message substitution.
pub mod services;

pub use services::{DescriptorParser, PackRegistry, PackReloader, SmileyPack};
