//! Read-only fill statistics over a matrix.

use serde::Serialize;

use qlc_model::Matrix;

/// Filled-cell count for one column, over data rows only.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnFill {
    pub name: String,
    pub filled: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixStats {
    /// Rows including the header.
    pub total_rows: usize,
    pub total_columns: usize,
    /// `total_rows * total_columns`.
    pub total_cells: usize,
    /// Non-empty cells over all rows, header included.
    pub filled_cells: usize,
    pub fill_percent: f64,
    pub columns: Vec<ColumnFill>,
}

pub fn matrix_stats(matrix: &Matrix) -> MatrixStats {
    let total_rows = matrix.total_rows();
    let total_columns = matrix.width();
    let total_cells = total_rows * total_columns;

    let filled_cells = matrix
        .header
        .iter()
        .chain(matrix.rows.iter().flatten())
        .filter(|cell| !cell.is_empty())
        .count();

    let columns = matrix
        .header
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnFill {
            name: name.clone(),
            filled: matrix
                .rows
                .iter()
                .filter(|row| row.get(index).is_some_and(|cell| !cell.is_empty()))
                .count(),
        })
        .collect();

    let fill_percent = if total_cells == 0 {
        0.0
    } else {
        filled_cells as f64 / total_cells as f64 * 100.0
    };

    MatrixStats {
        total_rows,
        total_columns,
        total_cells,
        filled_cells,
        fill_percent,
        columns,
    }
}
