pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{QlcWriter, WriteOptions, render_document, write_wordlist};
