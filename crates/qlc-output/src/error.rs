use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when writing wordlist files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output format name not recognized.
    #[error("unsupported output format: {format} (supported: qlc)")]
    UnsupportedFormat { format: String },

    /// File-level I/O failure.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stream-level I/O failure.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
