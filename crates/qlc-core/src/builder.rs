//! Matrix construction from loaded rows.
//!
//! The first loaded row is the header. The concept column is found by
//! trimmed equality with the concept marker; language columns by a
//! case-sensitive substring match on the language marker. The built matrix
//! puts the concept column first, followed by the language columns in
//! their original left-to-right order, with the marker substring stripped
//! from the doculect names.

use std::path::Path;

use tracing::debug;

use qlc_model::{Matrix, SpreadsheetOptions};

use crate::error::{Result, SpreadsheetError};

pub fn build_matrix(
    rows: &[Vec<String>],
    path: &Path,
    options: &SpreadsheetOptions,
) -> Result<Matrix> {
    let Some(source_header) = rows.first() else {
        return Err(SpreadsheetError::EmptyInput {
            path: path.to_path_buf(),
        });
    };

    let mut concept_index = None;
    let mut language_indices = Vec::new();
    for (index, cell) in source_header.iter().enumerate() {
        if concept_index.is_none() && cell.trim() == options.concept_marker {
            concept_index = Some(index);
        }
        if cell.contains(&options.language_marker) {
            language_indices.push(index);
        }
    }
    let Some(concept_index) = concept_index else {
        return Err(SpreadsheetError::ConceptMarkerNotFound {
            marker: options.concept_marker.clone(),
        });
    };

    let mut header = Vec::with_capacity(language_indices.len() + 1);
    header.push(source_header[concept_index].clone());
    for &index in &language_indices {
        header.push(
            source_header[index]
                .replace(&options.language_marker, "")
                .trim()
                .to_string(),
        );
    }

    let mut data = Vec::with_capacity(rows.len().saturating_sub(1));
    for row in &rows[1..] {
        let mut out = Vec::with_capacity(header.len());
        out.push(cell_at(row, concept_index));
        for &index in &language_indices {
            out.push(cell_at(row, index));
        }
        data.push(out);
    }

    debug!(
        concept_index,
        doculects = language_indices.len(),
        rows = data.len(),
        "matrix built"
    );
    Ok(Matrix::new(header, data))
}

/// Positions past the end of a short row are implicitly absent, not an
/// error. The empty cell keeps the row at header width.
fn cell_at(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
