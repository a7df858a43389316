//! Delimited-text loader.
//!
//! Reads a spreadsheet file into rows of string cells. Header handling,
//! trimming, and normalization are stage concerns and happen downstream;
//! cells are passed through verbatim.

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for the delimited-text loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Column separator. Must be ASCII (the reader works on bytes).
    pub separator: char,
    /// Comment-line marker. Must be ASCII.
    pub comment: char,
    /// Extension hint appended to the input path before opening.
    pub file_format: Option<String>,
    /// Datatype hint. Recorded only; every cell is read as text.
    pub dtype: Option<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            separator: '\t',
            comment: '#',
            file_format: None,
            dtype: None,
        }
    }
}

/// The path the loader actually opens: the input path with the format
/// hint appended as an extra extension, when one is configured.
pub fn resolve_input_path(path: &Path, file_format: Option<&str>) -> PathBuf {
    match file_format {
        Some(format) => {
            let mut resolved = OsString::from(path.as_os_str());
            resolved.push(".");
            resolved.push(format);
            PathBuf::from(resolved)
        }
        None => path.to_path_buf(),
    }
}

/// Read a delimited file into rows of cells.
///
/// Rows may be ragged; short rows are passed through as-is and padded by
/// the matrix builder. Rows whose cells are all blank are skipped, as are
/// comment lines.
pub fn read_rows(path: &Path, options: &LoaderOptions) -> Result<Vec<Vec<String>>> {
    if !options.separator.is_ascii() {
        return Err(IngestError::InvalidSeparator {
            separator: options.separator,
        });
    }
    if !options.comment.is_ascii() {
        return Err(IngestError::InvalidComment {
            marker: options.comment,
        });
    }
    let path = resolve_input_path(path, options.file_format.as_deref());
    if let Some(dtype) = &options.dtype {
        debug!(dtype = %dtype, "dtype hint recorded; cells are read as text");
    }

    let file = File::open(&path).map_err(|source| IngestError::io(&path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.separator as u8)
        .comment(Some(options.comment as u8))
        .from_reader(file);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(&path, source))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), path = %path.display(), "loaded delimited file");
    Ok(rows)
}
