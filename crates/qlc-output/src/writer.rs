//! QLC wordlist file writer.
//!
//! The written document is `@`-metadata lines, a `#` comment separator, a
//! header row of `ID` plus the uppercased schema fields, then one
//! tab-separated row per entry with its id.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use qlc_model::{ENTRY_FIELDS, Wordlist};

use crate::error::{OutputError, Result};

/// Options for the path-level writer entry point.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Output path. Defaults to `wordlist-<UTC timestamp>.qlc` in the
    /// current directory.
    pub path: Option<PathBuf>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }
}

/// Streaming QLC writer over any `Write` sink.
pub struct QlcWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> QlcWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write the full document for a wordlist.
    pub fn write_wordlist(mut self, wordlist: &Wordlist) -> Result<()> {
        self.writer.write_all(render_document(wordlist).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render the QLC document for a wordlist.
pub fn render_document(wordlist: &Wordlist) -> String {
    let mut out = String::new();
    if let Some(input) = wordlist.meta("infile") {
        out.push_str(&format!("@input file: {input}\n"));
    }
    out.push_str(&format!(
        "@date: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("#\n");

    out.push_str("ID");
    for field in ENTRY_FIELDS {
        out.push('\t');
        out.push_str(&field.to_uppercase());
    }
    out.push('\n');

    for (id, entry) in wordlist.iter() {
        out.push_str(&format!(
            "{id}\t{}\t{}\t{}\n",
            entry.concept, entry.doculect, entry.counterpart
        ));
    }
    out
}

/// Write a wordlist to a file in the named format.
///
/// `qlc` is the current format; `csv` is a deprecated alias that logs a
/// warning and routes to the same writer; any other name is an error.
/// The document is rendered first and committed through a sibling temp
/// file, so a hard failure never leaves a partial output file.
pub fn write_wordlist(
    format: &str,
    wordlist: &Wordlist,
    options: &WriteOptions,
) -> Result<PathBuf> {
    match format {
        "qlc" => {}
        "csv" => {
            warn!("the csv output format is deprecated, use qlc instead; routing to the qlc writer");
        }
        other => {
            return Err(OutputError::UnsupportedFormat {
                format: other.to_string(),
            });
        }
    }
    let path = options.path.clone().unwrap_or_else(default_output_path);
    let document = render_document(wordlist);
    commit(&path, document.as_bytes())?;
    info!(path = %path.display(), entries = wordlist.len(), "wordlist written");
    Ok(path)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "wordlist-{}.qlc",
        Utc::now().format("%Y%m%d-%H%M%S")
    ))
}

fn commit(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_path(path);
    fs::write(&tmp, bytes).map_err(|source| OutputError::io(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| OutputError::io(path, source))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use qlc_model::Entry;

    fn sample_wordlist() -> Wordlist {
        let mut wordlist = Wordlist::new();
        wordlist.set_meta("infile", "huber1992.tsv");
        for (concept, doculect, counterpart) in [
            ("hand", "English", "hand"),
            ("hand", "English", "palm"),
            ("hand", "French", "main"),
        ] {
            wordlist.push(Entry {
                concept: concept.to_string(),
                doculect: doculect.to_string(),
                counterpart: counterpart.to_string(),
            });
        }
        wordlist
    }

    #[test]
    fn renders_preamble_header_and_entries() {
        let document = render_document(&sample_wordlist());
        let stable: Vec<&str> = document
            .lines()
            .filter(|line| !line.starts_with("@date:"))
            .collect();
        assert_eq!(
            stable,
            vec![
                "@input file: huber1992.tsv",
                "#",
                "ID\tCONCEPT\tDOCULECT\tCOUNTERPART",
                "1\thand\tEnglish\thand",
                "2\thand\tEnglish\tpalm",
                "3\thand\tFrench\tmain",
            ]
        );
    }

    #[test]
    fn omits_the_input_line_without_meta() {
        let document = render_document(&Wordlist::new());
        assert!(!document.contains("@input file"));
        assert!(document.starts_with("@date: "));
    }

    #[test]
    fn unknown_formats_are_rejected() {
        let error = write_wordlist("xlsx", &sample_wordlist(), &WriteOptions::default())
            .expect_err("unsupported format");
        assert!(matches!(error, OutputError::UnsupportedFormat { .. }));
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("out/words.qlc"));
        assert_eq!(tmp, Path::new("out/words.qlc.tmp"));
    }
}
