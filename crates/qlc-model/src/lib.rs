pub mod entry;
pub mod matrix;
pub mod options;

pub use entry::{ENTRY_FIELDS, Entry, Wordlist, field_index};
pub use matrix::Matrix;
pub use options::SpreadsheetOptions;
