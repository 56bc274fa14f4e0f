use std::path::PathBuf;

use crate::CellValue;

/// A wide-format source table: one row per entity×indicator, one column per
/// year, plus identifier columns.
///
/// Invariant: every row holds exactly `columns.len()` cells (the ingest
/// layer pads or truncates ragged rows to the header width).
#[derive(Debug, Clone)]
pub struct WideTable {
    /// Trimmed header names in source order.
    pub columns: Vec<String>,
    /// Row-major cell data.
    pub rows: Vec<Vec<CellValue>>,
    /// Source file, kept for diagnostics.
    pub source: PathBuf,
}

impl WideTable {
    pub fn new(columns: Vec<String>, source: PathBuf) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            source,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Finds a column whose trimmed header contains `needle`,
    /// case-insensitively. Returns the first match in source order.
    pub fn find_column(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.columns
            .iter()
            .position(|name| name.to_lowercase().contains(&needle))
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }
}

/// A year-bearing column: its position in the wide table and the year its
/// header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearColumn {
    pub index: usize,
    pub year: i32,
}

/// Resolved column roles for a wide table.
///
/// `id_columns` holds every non-year column in source order; the entity and
/// indicator columns are members of it. Year columns keep source order,
/// which fixes the long-table iteration order.
#[derive(Debug, Clone)]
pub struct WideSchema {
    /// Entity identifier column (e.g. `Country Code`).
    pub entity_id: usize,
    /// Indicator code column (e.g. `Indicator Code`).
    pub indicator_code: usize,
    /// Indicator display-name column, when present.
    pub indicator_name: Option<usize>,
    /// All non-year columns, source order.
    pub id_columns: Vec<usize>,
    /// All year columns, source order.
    pub year_columns: Vec<YearColumn>,
}

impl WideSchema {
    /// Header names of the identifier columns, source order.
    pub fn id_column_names(&self, table: &WideTable) -> Vec<String> {
        self.id_columns
            .iter()
            .map(|&idx| table.columns[idx].clone())
            .collect()
    }
}

/// Extracts a standalone 4-digit year token from a column header.
///
/// `"2019"` and `"2019 [YR2019]"` both yield 2019; tokens embedded in longer
/// digit runs (`"X20190"`) do not count. Years outside 1000..=2999 are
/// rejected so code-like headers (`"SP.POP.0014"`) stay identifier columns.
pub fn extract_year(header: &str) -> Option<i32> {
    let bytes = header.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx].is_ascii_digit() {
            let start = idx;
            while idx < bytes.len() && bytes[idx].is_ascii_digit() {
                idx += 1;
            }
            if idx - start == 4 {
                let year: i32 = header[start..idx].parse().ok()?;
                if (1000..=2999).contains(&year) {
                    return Some(year);
                }
            }
        } else {
            idx += 1;
        }
    }
    None
}
