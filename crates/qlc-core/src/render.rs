//! Text renderings of a matrix, decoupled from console output.

use chrono::Utc;

use qlc_model::Matrix;

/// Render the matrix as delimiter-joined lines, header first, no
/// trailing delimiter.
pub fn render_matrix(matrix: &Matrix, delimiter: &str) -> String {
    let mut out = String::new();
    out.push_str(&matrix.header.join(delimiter));
    out.push('\n');
    for row in &matrix.rows {
        out.push_str(&row.join(delimiter));
        out.push('\n');
    }
    out
}

/// Render the legacy flat format: a preamble, then one tab-separated line
/// `id⇥language⇥concept⇥value` per data cell.
///
/// Empty cells are rendered as the literal `NaN` rather than omitted, so
/// ids count every data cell. The three-name banner above the four-field
/// lines is a preserved quirk of the format.
pub fn render_legacy_dump(matrix: &Matrix, input_file: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(name) = input_file {
        out.push_str(&format!("@input file: {name}\n"));
    }
    out.push_str(&format!(
        "@date: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("#\n");
    out.push_str("LANGUAGE\tCONCEPT\tCOUNTERPART\n");

    let mut id = 0usize;
    for row in &matrix.rows {
        let concept = row.first().map(String::as_str).unwrap_or("");
        for (language, cell) in matrix.doculects().iter().zip(row.iter().skip(1)) {
            id += 1;
            let value = if cell.is_empty() { "NaN" } else { cell.as_str() };
            out.push_str(&format!("{id}\t{language}\t{concept}\t{value}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    fn sample() -> Matrix {
        Matrix::new(
            row(&["CONCEPT", "German", "French"]),
            vec![
                row(&["hand", "Hand", "main"]),
                row(&["head", "", "tête"]),
            ],
        )
    }

    #[test]
    fn renders_delimiter_joined_lines() {
        let rendered = render_matrix(&sample(), " | ");
        insta::assert_snapshot!(rendered, @r"
        CONCEPT | German | French
        hand | Hand | main
        head |  | tête
        ");
    }

    #[test]
    fn legacy_dump_keeps_empty_cells_as_nan() {
        let rendered = render_legacy_dump(&sample(), Some("huber1992.tsv"));
        // the @date line is timestamped; compare everything else
        let stable: Vec<&str> = rendered
            .lines()
            .filter(|line| !line.starts_with("@date:"))
            .collect();
        assert_eq!(
            stable,
            vec![
                "@input file: huber1992.tsv",
                "#",
                "LANGUAGE\tCONCEPT\tCOUNTERPART",
                "1\tGerman\thand\tHand",
                "2\tFrench\thand\tmain",
                "3\tGerman\thead\tNaN",
                "4\tFrench\thead\ttête",
            ]
        );
    }

    #[test]
    fn legacy_dump_without_a_source_has_no_input_line() {
        let rendered = render_legacy_dump(&sample(), None);
        assert!(!rendered.contains("@input file"));
        assert!(rendered.starts_with("@date: "));
    }
}
