use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qlc_core::MatrixStats;

use crate::types::ConvertResult;

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Doculects"),
        header_cell("Entries"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(result.doculects),
        Cell::new(result.entries),
    ]);
    println!("{table}");
}

pub fn print_stats_table(stats: &MatrixStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total rows"), Cell::new(stats.total_rows)]);
    table.add_row(vec![
        Cell::new("Total columns"),
        Cell::new(stats.total_columns),
    ]);
    table.add_row(vec![
        Cell::new("Total possible cells"),
        Cell::new(stats.total_cells),
    ]);
    table.add_row(vec![
        Cell::new("Total filled cells"),
        Cell::new(format!(
            "{} ({:.1}%)",
            stats.filled_cells, stats.fill_percent
        )),
    ]);
    println!("{table}");

    let mut columns = Table::new();
    columns.set_header(vec![header_cell("Column"), header_cell("Filled")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 1, CellAlignment::Right);
    for column in &stats.columns {
        let filled = if column.filled > 0 {
            Cell::new(column.filled)
        } else {
            dim_cell(column.filled)
        };
        columns.add_row(vec![Cell::new(&column.name), filled]);
    }
    println!("{columns}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
