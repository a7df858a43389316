//! Blacklist rule loading and application.
//!
//! A rule file holds one `pattern,replacement` per line; blank lines and
//! `#` lines are skipped. Rules apply to data cells in file order, each
//! rule seeing the previous rule's output on the same cell, so rule order
//! is a first-class contract.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use qlc_model::Matrix;

use crate::error::{Result, SpreadsheetError};
use crate::normalize::nfd;

/// One ordered substitution rule.
#[derive(Debug, Clone)]
pub struct BlacklistRule {
    pub pattern: Regex,
    pub replacement: String,
}

/// Parse a rule file. A line with zero or more than one comma, or a
/// pattern that does not compile, aborts loading; bad lines are never
/// skipped silently.
pub fn load_rules(path: &Path) -> Result<Vec<BlacklistRule>> {
    let text = fs::read_to_string(path).map_err(|source| SpreadsheetError::BlacklistIo {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rules = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = nfd(line);
        let pieces: Vec<&str> = line.split(',').collect();
        let [pattern, replacement] = pieces.as_slice() else {
            return Err(SpreadsheetError::MalformedBlacklistRule {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.clone(),
            });
        };
        let pattern = Regex::new(pattern.trim()).map_err(|source| {
            SpreadsheetError::InvalidBlacklistPattern {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            }
        })?;
        rules.push(BlacklistRule {
            pattern,
            replacement: replacement.trim().to_string(),
        });
    }
    debug!(rules = rules.len(), path = %path.display(), "blacklist loaded");
    Ok(rules)
}

/// Apply rules to every data cell, header excluded. Per cell this is a
/// fold over the rule list: each matching rule substitutes all matches and
/// trims the result before the next rule runs.
pub fn apply_rules(matrix: &mut Matrix, rules: &[BlacklistRule]) {
    for (row_index, row) in matrix.rows.iter_mut().enumerate() {
        for (col, cell) in row.iter_mut().enumerate() {
            for rule in rules {
                if rule.pattern.is_match(cell) {
                    let replaced = rule
                        .pattern
                        .replace_all(cell, rule.replacement.as_str())
                        .trim()
                        .to_string();
                    debug!(
                        row = row_index + 1,
                        col,
                        from = %cell,
                        to = %replaced,
                        "blacklist substitution"
                    );
                    *cell = replaced;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn rule_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create rule file");
        file.write_all(content.as_bytes()).expect("write rules");
        file
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn parses_rules_in_file_order() {
        let file = rule_file("# cleanup\n\na, b\n\\?,\n");
        let rules = load_rules(file.path()).expect("load rules");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern.as_str(), "a");
        assert_eq!(rules[0].replacement, "b");
        assert_eq!(rules[1].replacement, "");
    }

    #[test]
    fn rule_lines_are_nfd_normalized() {
        let file = rule_file("\u{e9},e\n");
        let rules = load_rules(file.path()).expect("load rules");
        // the pattern is the decomposed form e + combining acute
        assert_eq!(rules[0].pattern.as_str(), "e\u{301}");
    }

    #[test]
    fn a_line_without_a_comma_aborts_loading() {
        let file = rule_file("a, b\nbroken line\n");
        let error = load_rules(file.path()).expect_err("malformed line");
        assert!(matches!(
            error,
            SpreadsheetError::MalformedBlacklistRule { line: 2, .. }
        ));
    }

    #[test]
    fn a_line_with_two_commas_aborts_loading() {
        let file = rule_file("a,b,c\n");
        let error = load_rules(file.path()).expect_err("too many commas");
        assert!(matches!(
            error,
            SpreadsheetError::MalformedBlacklistRule { line: 1, .. }
        ));
    }

    #[test]
    fn an_invalid_pattern_aborts_loading() {
        let file = rule_file("[unclosed, x\n");
        let error = load_rules(file.path()).expect_err("bad regex");
        assert!(matches!(
            error,
            SpreadsheetError::InvalidBlacklistPattern { line: 1, .. }
        ));
    }

    #[test]
    fn later_rules_see_earlier_rules_output() {
        let file = rule_file("a,b\nb,c\n");
        let rules = load_rules(file.path()).expect("load rules");
        let mut matrix = Matrix::new(row(&["CONCEPT", "X"]), vec![row(&["hand", "a"])]);
        apply_rules(&mut matrix, &rules);
        assert_eq!(matrix.rows[0][1], "c");
    }

    #[test]
    fn the_header_row_is_excluded() {
        let file = rule_file("CONCEPT,GLOSS\n");
        let rules = load_rules(file.path()).expect("load rules");
        let mut matrix = Matrix::new(
            row(&["CONCEPT", "X"]),
            vec![row(&["CONCEPT", "word"])],
        );
        apply_rules(&mut matrix, &rules);
        assert_eq!(matrix.header[0], "CONCEPT");
        assert_eq!(matrix.rows[0][0], "GLOSS");
    }

    #[test]
    fn substitution_results_are_trimmed() {
        let file = rule_file("-,\n");
        let rules = load_rules(file.path()).expect("load rules");
        let mut matrix = Matrix::new(row(&["CONCEPT", "X"]), vec![row(&["hand", "hand -"])]);
        apply_rules(&mut matrix, &rules);
        assert_eq!(matrix.rows[0][1], "hand");
    }
}
