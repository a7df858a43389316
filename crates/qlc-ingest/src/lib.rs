pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{LoaderOptions, read_rows, resolve_input_path};
