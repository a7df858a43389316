pub mod blacklist;
pub mod builder;
pub mod error;
pub mod expand;
pub mod normalize;
pub mod render;
pub mod spreadsheet;
pub mod stats;

pub use blacklist::{BlacklistRule, apply_rules, load_rules};
pub use builder::build_matrix;
pub use error::{Result, SpreadsheetError};
pub use expand::expand;
pub use normalize::{nfd, normalize_matrix};
pub use render::{render_legacy_dump, render_matrix};
pub use spreadsheet::Spreadsheet;
pub use stats::{ColumnFill, MatrixStats, matrix_stats};
