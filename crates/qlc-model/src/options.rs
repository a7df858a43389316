//! Configuration options for the spreadsheet pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options controlling how a spreadsheet is loaded and reshaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetOptions {
    /// File extension hint appended to the input path before opening.
    pub file_format: Option<String>,

    /// Loader datatype hint. Accepted and recorded, not applied: every
    /// cell is read as text.
    pub dtype: Option<String>,

    /// Comment-line marker in the input file.
    pub comment: char,

    /// Column separator in the input file.
    pub separator: char,

    /// Substring identifying language columns in the header.
    pub language_marker: String,

    /// Header text identifying the concept column.
    pub concept_marker: String,

    /// Path to the blacklist rule file. A missing file is a skip, not an
    /// error.
    pub blacklist: Option<PathBuf>,

    /// Reserved for a future rule configuration file; accepted but never
    /// read.
    pub rule_config: Option<PathBuf>,

    /// Separator packing multiple counterparts into a single cell.
    pub cell_separator: String,

    /// Expand only rows where every cell is non-empty.
    pub full_rows: bool,
}

impl Default for SpreadsheetOptions {
    fn default() -> Self {
        Self {
            file_format: None,
            dtype: None,
            comment: '#',
            separator: '\t',
            language_marker: "NAME".to_string(),
            concept_marker: "CONCEPT".to_string(),
            blacklist: None,
            rule_config: None,
            cell_separator: ";".to_string(),
            full_rows: false,
        }
    }
}

impl SpreadsheetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file_format(mut self, format: impl Into<String>) -> Self {
        self.file_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_dtype(mut self, dtype: impl Into<String>) -> Self {
        self.dtype = Some(dtype.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, marker: char) -> Self {
        self.comment = marker;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_language_marker(mut self, marker: impl Into<String>) -> Self {
        self.language_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_concept_marker(mut self, marker: impl Into<String>) -> Self {
        self.concept_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_blacklist(mut self, path: impl Into<PathBuf>) -> Self {
        self.blacklist = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_rule_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.rule_config = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_full_rows(mut self, enable: bool) -> Self {
        self.full_rows = enable;
        self
    }
}
