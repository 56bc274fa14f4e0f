use serde::Serialize;

/// One sheet written to the workbook.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenSheet {
    pub name: String,
    pub rows: usize,
}

/// Counters collected across a full run, serialized by `--report-json`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReshapeReport {
    /// Rows in the wide source table.
    pub source_rows: usize,
    /// Year columns detected in the wide source table.
    pub year_columns: usize,
    /// Long records emitted (after the missing-value policy).
    pub records: usize,
    /// Records whose value is an explicit missing.
    pub missing_values: usize,
    /// Cells that held non-numeric text and were coerced to missing.
    pub coerced_cells: usize,
    /// Records removed by `MissingValuePolicy::Drop`.
    pub dropped_records: usize,
    /// Distinct entities that matched a metadata entry.
    pub matched_entities: usize,
    /// Distinct entities absent from the metadata table.
    pub unmatched_entities: usize,
    /// Sheets written to the workbook, in order.
    pub sheets: Vec<WrittenSheet>,
}

impl ReshapeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total data rows across all written sheets.
    pub fn written_rows(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.rows).sum()
    }
}
