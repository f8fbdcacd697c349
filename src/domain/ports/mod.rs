mod settings_port;
mod thumbnail_port;

pub use settings_port::{SettingsEvent, SettingsPort};
#[cfg(test)]
pub use thumbnail_port::MockThumbnailPort;
pub use thumbnail_port::{DEFAULT_THUMBNAIL_SIZE, ThumbnailPort};

#[cfg(test)]
pub mod mocks {
    pub use super::settings_port::mock::MockSettings;
}
