//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{EmoticonEntry, EncodedImage, PackDescriptor};
pub use errors::{ImageError, LookupError, PackError, SettingsError};
pub use ports::{SettingsEvent, SettingsPort, ThumbnailPort};
