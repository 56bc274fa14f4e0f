use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use wdi_model::LongTable;

use crate::types::RunResult;

/// Rows shown in the console preview of the long table.
const PREVIEW_ROWS: usize = 15;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Prints the first rows of the long table, the way a spreadsheet shows
/// them: header plus up to [`PREVIEW_ROWS`] data rows.
pub fn print_preview(long: &LongTable) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        long.header()
            .into_iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    for record in long.records.iter().take(PREVIEW_ROWS) {
        table.add_row(long.record_cells(record).iter().map(|cell| cell.display()));
    }
    println!("Sample ({} of {} rows):", long.len().min(PREVIEW_ROWS), long.len());
    println!("{table}");
}

pub fn print_summary(result: &RunResult) {
    let report = &result.report;
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        Cell::new("Sheet").add_attribute(Attribute::Bold),
        Cell::new("Rows").add_attribute(Attribute::Bold),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for sheet in &report.sheets {
        table.add_row(vec![Cell::new(&sheet.name), Cell::new(sheet.rows)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(report.written_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Records: {} ({} missing, {} coerced, {} dropped)",
        report.records, report.missing_values, report.coerced_cells, report.dropped_records
    );
    if report.matched_entities + report.unmatched_entities > 0 {
        println!(
            "Metadata: {} entities matched, {} without metadata",
            report.matched_entities, report.unmatched_entities
        );
    }
}
