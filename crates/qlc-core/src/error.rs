use std::path::PathBuf;

use qlc_ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum SpreadsheetError {
    #[error("concept marker {marker:?} not found in the header row")]
    ConceptMarkerNotFound { marker: String },

    #[error("spreadsheet {path} contains no rows")]
    EmptyInput { path: PathBuf },

    #[error(
        "malformed blacklist rule at {path}:{line}: expected `pattern,replacement`, got {content:?}"
    )]
    MalformedBlacklistRule {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("invalid blacklist pattern at {path}:{line}: {source}")]
    InvalidBlacklistPattern {
        path: PathBuf,
        line: usize,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read blacklist file {path}: {source}")]
    BlacklistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, SpreadsheetError>;
