pub mod descriptor_parser;
pub mod pack_registry;
pub mod pack_reloader;
pub mod smiley_pack;
pub mod word_tokenizer;

pub use descriptor_parser::DescriptorParser;
pub use pack_registry::PackRegistry;
pub(crate) use pack_registry::absolute_path;
pub use pack_reloader::PackReloader;
pub use smiley_pack::SmileyPack;
pub use word_tokenizer::{Word, Words, rewrite_words, words};
