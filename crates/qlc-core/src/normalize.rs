//! Unicode normalization of matrix cells.

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use qlc_model::Matrix;

/// Canonical decomposition (NFD) of a string.
pub fn nfd(value: &str) -> String {
    value.nfd().collect()
}

/// Replace every cell, header included, with its NFD form. Idempotent;
/// cells already in NFD are left untouched.
pub fn normalize_matrix(matrix: &mut Matrix) {
    normalize_row(&mut matrix.header, 0);
    for (index, row) in matrix.rows.iter_mut().enumerate() {
        normalize_row(row, index + 1);
    }
}

fn normalize_row(row: &mut [String], row_index: usize) {
    for (col, cell) in row.iter_mut().enumerate() {
        let normalized = nfd(cell);
        if normalized != *cell {
            debug!(row = row_index, col, "cell not in Unicode NFD, normalizing");
            *cell = normalized;
        }
    }
}
