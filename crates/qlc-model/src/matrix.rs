use serde::{Deserialize, Serialize};

/// Concept-first grid of cells: one header row plus data rows.
///
/// `header[0]` is the concept column name, the remaining header cells are
/// doculect names (language-marker substring already stripped). Invariant:
/// every data row has exactly `header.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Matrix {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of columns (concept column plus doculect columns).
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Row count including the header row, the figure the stats report uses.
    pub fn total_rows(&self) -> usize {
        self.rows.len() + 1
    }

    /// Doculect names, i.e. the header without the concept column.
    pub fn doculects(&self) -> &[String] {
        self.header.get(1..).unwrap_or(&[])
    }

    /// A copy of the matrix keeping only data rows with no empty cell.
    /// The header is schema and is always carried over.
    pub fn full_rows(&self) -> Matrix {
        Matrix {
            header: self.header.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| is_full_row(row))
                .cloned()
                .collect(),
        }
    }

}

/// A row is full iff no cell is the empty string.
pub fn is_full_row(row: &[String]) -> bool {
    row.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn full_rows_drops_rows_with_empty_cells() {
        let matrix = Matrix::new(
            row(&["CONCEPT", "German", "French"]),
            vec![
                row(&["hand", "Hand", "main"]),
                row(&["head", "", "tête"]),
                row(&["eye", "Auge", "œil"]),
            ],
        );
        let full = matrix.full_rows();
        assert_eq!(full.header, matrix.header);
        assert_eq!(full.rows.len(), 2);
        assert!(full.rows.iter().all(|row| is_full_row(row)));
        // every dropped row has at least one empty cell
        for dropped in matrix.rows.iter().filter(|row| !full.rows.contains(row)) {
            assert!(dropped.iter().any(String::is_empty));
        }
    }

    #[test]
    fn total_rows_counts_the_header() {
        let matrix = Matrix::new(row(&["CONCEPT", "German"]), vec![row(&["hand", "Hand"])]);
        assert_eq!(matrix.total_rows(), 2);
        assert_eq!(matrix.width(), 2);
        assert_eq!(matrix.doculects(), ["German".to_string()]);
    }
}
