//! File-level tests for the QLC writer.

use std::fs;

use tempfile::TempDir;

use qlc_model::{Entry, Wordlist};
use qlc_output::{OutputError, QlcWriter, WriteOptions, write_wordlist};

fn sample_wordlist() -> Wordlist {
    let mut wordlist = Wordlist::new();
    wordlist.set_meta("infile", "words.tsv");
    wordlist.push(Entry {
        concept: "hand".to_string(),
        doculect: "German".to_string(),
        counterpart: "Hand".to_string(),
    });
    wordlist
}

#[test]
fn writes_the_document_to_the_requested_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("words.qlc");
    let written = write_wordlist(
        "qlc",
        &sample_wordlist(),
        &WriteOptions::new().with_path(Some(path.clone())),
    )
    .expect("write wordlist");
    assert_eq!(written, path);

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.contains("@input file: words.tsv"));
    assert!(content.contains("ID\tCONCEPT\tDOCULECT\tCOUNTERPART"));
    assert!(content.contains("1\thand\tGerman\tHand"));

    // the temp file used for the atomic commit is gone
    assert!(!dir.path().join("words.qlc.tmp").exists());
}

#[test]
fn the_csv_alias_routes_to_the_qlc_writer() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("alias.qlc");
    write_wordlist(
        "csv",
        &sample_wordlist(),
        &WriteOptions::new().with_path(Some(path.clone())),
    )
    .expect("write via alias");
    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.contains("ID\tCONCEPT\tDOCULECT\tCOUNTERPART"));
}

#[test]
fn an_unsupported_format_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("never.qlc");
    let error = write_wordlist(
        "xlsx",
        &sample_wordlist(),
        &WriteOptions::new().with_path(Some(path.clone())),
    )
    .expect_err("unsupported format");
    assert!(matches!(error, OutputError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn the_streaming_writer_matches_the_file_writer() {
    let mut buffer = Vec::new();
    QlcWriter::new(&mut buffer)
        .write_wordlist(&sample_wordlist())
        .expect("write to buffer");
    let content = String::from_utf8(buffer).expect("utf-8 document");
    assert!(content.contains("1\thand\tGerman\tHand"));
}
