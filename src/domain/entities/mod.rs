//! Domain entity definitions.

mod emoticon;
mod encoded_image;

pub use emoticon::{DESCRIPTOR_FILE_NAME, EmoticonEntry, PackDescriptor};
pub use encoded_image::EncodedImage;
