use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use qlc_core::Spreadsheet;
use qlc_model::SpreadsheetOptions;
use qlc_output::{WriteOptions, write_wordlist};

use crate::cli::{ConvertArgs, DumpArgs, ShowArgs, SpreadsheetArgs, StatsArgs};
use crate::summary::print_stats_table;
use crate::types::ConvertResult;

fn spreadsheet_options(args: &SpreadsheetArgs) -> SpreadsheetOptions {
    let mut options = SpreadsheetOptions::default()
        .with_comment(args.comment)
        .with_separator(args.separator)
        .with_language_marker(args.language_marker.clone())
        .with_concept_marker(args.concept_marker.clone())
        .with_cell_separator(args.cell_separator.clone())
        .with_full_rows(args.full_rows);
    if let Some(blacklist) = &args.blacklist {
        options = options.with_blacklist(blacklist.clone());
    }
    if let Some(rule_config) = &args.rule_config {
        options = options.with_rule_config(rule_config.clone());
    }
    if let Some(file_format) = &args.file_format {
        options = options.with_file_format(file_format.clone());
    }
    if let Some(dtype) = &args.dtype {
        options = options.with_dtype(dtype.clone());
    }
    options
}

fn load_spreadsheet(args: &SpreadsheetArgs) -> Result<Spreadsheet> {
    Spreadsheet::from_path(&args.path, spreadsheet_options(args))
        .with_context(|| format!("load spreadsheet {}", args.path.display()))
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", spreadsheet = %args.spreadsheet.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let spreadsheet = load_spreadsheet(&args.spreadsheet)?;
    let write_options = WriteOptions::new().with_path(args.output.clone());
    let output = write_wordlist(args.format.as_str(), spreadsheet.wordlist(), &write_options)
        .context("write wordlist")?;

    info!(
        entries = spreadsheet.wordlist().len(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );
    Ok(ConvertResult {
        input: spreadsheet.path().to_path_buf(),
        output,
        rows: spreadsheet.matrix().rows.len(),
        doculects: spreadsheet.matrix().doculects().len(),
        entries: spreadsheet.wordlist().len(),
    })
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let spreadsheet = load_spreadsheet(&args.spreadsheet)?;
    let stats = spreadsheet.stats();
    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("serialize stats")?;
        println!("{json}");
    } else {
        print_stats_table(&stats);
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let spreadsheet = load_spreadsheet(&args.spreadsheet)?;
    print!("{}", spreadsheet.render(&args.delimiter));
    Ok(())
}

pub fn run_dump(args: &DumpArgs) -> Result<()> {
    let spreadsheet = load_spreadsheet(&args.spreadsheet)?;
    print!("{}", spreadsheet.legacy_dump());
    Ok(())
}
