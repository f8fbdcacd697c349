//! Domain error types.

mod image_error;
mod lookup_error;
mod pack_error;
mod settings_error;

pub use image_error::ImageError;
pub use lookup_error::LookupError;
pub use pack_error::PackError;
pub use settings_error::SettingsError;
