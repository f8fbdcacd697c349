//! Pack loading error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to load a smiley pack descriptor.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PackError {
    #[error("cannot open smiley pack descriptor {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// Creates open failure error.
    #[must_use]
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the descriptor path that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } => path,
        }
    }
}
