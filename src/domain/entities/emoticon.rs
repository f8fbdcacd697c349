//! Emoticon pack descriptor entities.

/// File name every pack directory must contain to be discovered.
pub const DESCRIPTOR_FILE_NAME: &str = "emoticons.xml";

/// One `emoticon` entry of a pack descriptor.
///
/// All `tokens` render as the image stored in `file`, which is relative to
/// the pack directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmoticonEntry {
    /// Image file name, empty when the entry carries no `file` attribute.
    pub file: String,
    /// Synonym tokens in descriptor order, e.g. `:)` and `:-)`.
    pub tokens: Vec<String>,
}

impl EmoticonEntry {
    /// Creates an entry for `file` without tokens.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            tokens: Vec::new(),
        }
    }

    /// Adds a synonym token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }
}

/// Parsed contents of an `emoticons.xml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackDescriptor {
    /// Entries in document order.
    pub entries: Vec<EmoticonEntry>,
}

impl PackDescriptor {
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the descriptor declares no emoticons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of declared tokens, duplicates included.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.entries.iter().map(|e| e.tokens.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count_includes_duplicates() {
        let descriptor = PackDescriptor {
            entries: vec![
                EmoticonEntry::new("smile.png")
                    .with_token(":)")
                    .with_token(":-)"),
                EmoticonEntry::new("other.png").with_token(":)"),
                EmoticonEntry::new("empty.png"),
            ],
        };

        assert_eq!(descriptor.len(), 3);
        assert_eq!(descriptor.token_count(), 3);
    }
}
