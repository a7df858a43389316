//! Property tests for the pipeline stages.

use std::path::Path;

use proptest::collection::vec;
use proptest::prelude::{ProptestConfig, any, proptest};

use qlc_core::{build_matrix, nfd, normalize_matrix};
use qlc_model::{Matrix, SpreadsheetOptions};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn nfd_is_idempotent(value in any::<String>()) {
        let once = nfd(&value);
        let twice = nfd(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn normalizing_a_normalized_matrix_changes_nothing(
        cells in vec(vec("\\PC{0,8}", 1..5), 1..6)
    ) {
        let header = cells[0].clone();
        let rows = cells[1..].to_vec();
        let mut matrix = Matrix::new(header, rows);
        normalize_matrix(&mut matrix);
        let once = matrix.clone();
        normalize_matrix(&mut matrix);
        assert_eq!(matrix, once);
    }

    #[test]
    fn built_rows_always_match_the_header_width(
        languages in 1usize..6,
        rows in vec(vec("[a-z; ]{0,6}", 0..9), 0..8)
    ) {
        let mut input = Vec::with_capacity(rows.len() + 1);
        let mut header = vec!["CONCEPT".to_string()];
        for index in 0..languages {
            header.push(format!("L{index} NAME"));
        }
        input.push(header);
        input.extend(rows);

        let matrix = build_matrix(&input, Path::new("prop.tsv"), &SpreadsheetOptions::default())
            .expect("header carries the concept marker");
        for row in &matrix.rows {
            assert_eq!(row.len(), matrix.width());
        }
    }
}
