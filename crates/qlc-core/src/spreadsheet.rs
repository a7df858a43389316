//! Construction-time pipeline over a concept spreadsheet.
//!
//! `Spreadsheet::from_path` runs every stage in order: load, build the
//! matrix, Unicode-normalize, apply the blacklist, expand to a wordlist.
//! The finished spreadsheet is read-only.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use qlc_ingest::{LoaderOptions, read_rows};
use qlc_model::{Matrix, SpreadsheetOptions, Wordlist};

use crate::blacklist::{apply_rules, load_rules};
use crate::builder::build_matrix;
use crate::error::Result;
use crate::expand::expand;
use crate::normalize::normalize_matrix;
use crate::render::{render_legacy_dump, render_matrix};
use crate::stats::{MatrixStats, matrix_stats};

#[derive(Debug, Clone)]
pub struct Spreadsheet {
    path: PathBuf,
    options: SpreadsheetOptions,
    matrix: Matrix,
    wordlist: Wordlist,
}

impl Spreadsheet {
    /// Load a spreadsheet and run the full pipeline.
    ///
    /// Configuration errors (missing concept marker, malformed blacklist
    /// rules) surface here; no partially built spreadsheet escapes.
    pub fn from_path(path: impl Into<PathBuf>, options: SpreadsheetOptions) -> Result<Self> {
        let path = path.into();
        let loader = LoaderOptions {
            separator: options.separator,
            comment: options.comment,
            file_format: options.file_format.clone(),
            dtype: options.dtype.clone(),
        };
        let rows = read_rows(&path, &loader)?;
        let mut matrix = build_matrix(&rows, &path, &options)?;
        info!(
            rows = matrix.rows.len(),
            doculects = matrix.doculects().len(),
            path = %path.display(),
            "matrix built"
        );

        normalize_matrix(&mut matrix);

        match &options.blacklist {
            Some(blacklist) if blacklist.is_file() => {
                let rules = load_rules(blacklist)?;
                apply_rules(&mut matrix, &rules);
                info!(rules = rules.len(), path = %blacklist.display(), "blacklist applied");
            }
            Some(blacklist) => {
                debug!(
                    path = %blacklist.display(),
                    "no blacklist file at the configured path, proceeding without one"
                );
            }
            None => {}
        }

        let mut wordlist = if options.full_rows {
            expand(&matrix.full_rows(), &options.cell_separator)
        } else {
            expand(&matrix, &options.cell_separator)
        };
        wordlist.set_meta("infile", path.display().to_string());
        info!(entries = wordlist.len(), "wordlist prepared");

        Ok(Self {
            path,
            options,
            matrix,
            wordlist,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &SpreadsheetOptions {
        &self.options
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn stats(&self) -> MatrixStats {
        matrix_stats(&self.matrix)
    }

    pub fn render(&self, delimiter: &str) -> String {
        render_matrix(&self.matrix, delimiter)
    }

    pub fn legacy_dump(&self) -> String {
        render_legacy_dump(&self.matrix, Some(&self.path.display().to_string()))
    }
}
