//! Relational expansion of a matrix into a wordlist.

use tracing::debug;

use qlc_model::{Entry, Matrix, Wordlist};

/// Expand a matrix into (concept, doculect, counterpart) entries.
///
/// Data rows with an empty trimmed concept are skipped. Each language cell
/// is split on `cell_separator`; every non-empty trimmed piece becomes one
/// entry. Ids ascend from 1 in row-major, then column-major order; to
/// expand only full rows, pass `matrix.full_rows()`.
pub fn expand(matrix: &Matrix, cell_separator: &str) -> Wordlist {
    let mut wordlist = Wordlist::new();
    let doculects = matrix.doculects();
    for row in &matrix.rows {
        let Some(concept) = row.first().map(|cell| cell.trim()) else {
            continue;
        };
        if concept.is_empty() {
            continue;
        }
        for (doculect, cell) in doculects.iter().zip(row.iter().skip(1)) {
            for piece in cell.split(cell_separator) {
                let counterpart = piece.trim();
                if counterpart.is_empty() {
                    continue;
                }
                wordlist.push(Entry {
                    concept: concept.to_string(),
                    doculect: doculect.clone(),
                    counterpart: counterpart.to_string(),
                });
            }
        }
    }
    debug!(entries = wordlist.len(), "matrix expanded");
    wordlist
}
