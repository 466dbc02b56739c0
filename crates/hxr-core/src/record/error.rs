//! Error types for rendering and saving records.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an exchange produced no response (connection refused, timeout, ...).
/// Carried as data inside a record; produced by the fetch side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExchangeError {
    message: String,
}

impl ExchangeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    /// The record holds a failed exchange; there is nothing to render or save.
    #[error("exchange failed: {0}")]
    Failed(ExchangeError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Save failure, tagged with the path that was being created or written
/// (the base path for directory creation, else the `.headers`/`.body` file).
#[derive(Debug, Error)]
#[error("failed to save {}", path.display())]
pub struct SaveError {
    path: PathBuf,
    #[source]
    source: RecordError,
}

impl SaveError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: impl Into<RecordError>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &RecordError {
        &self.source
    }
}
