//! Configuration options for reshaping and export.

use serde::{Deserialize, Serialize};

/// Excel's sheet-name character limit.
pub const SHEET_NAME_MAX_LEN: usize = 31;

/// Excel's row limit per sheet, minus one row reserved for the header.
const DEFAULT_ROWS_PER_SHEET: usize = 1_048_576 - 1;

/// Policy for long records whose value could not be coerced to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingValuePolicy {
    /// Keep the record with an explicit missing value.
    #[default]
    Keep,
    /// Drop the record and count it in the reshape report.
    Drop,
}

/// Options controlling the wide→long reshape and metadata merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReshapeOptions {
    /// What to do with records whose value is missing after coercion.
    pub missing_values: MissingValuePolicy,

    /// Metadata attribute columns to merge. `None` merges every non-key
    /// column of the metadata file.
    pub metadata_attributes: Option<Vec<String>>,
}

impl ReshapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    pub fn with_metadata_attributes(mut self, attributes: Vec<String>) -> Self {
        self.metadata_attributes = Some(attributes);
        self
    }
}

/// Options controlling workbook export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Maximum data rows per sheet (the header row is not counted).
    pub rows_per_sheet: usize,

    /// Paginate each indicator's rows independently instead of splitting the
    /// whole table into `Part{n}` sheets.
    pub split_by_indicator: bool,

    /// Append the `Indicator_Info` catalog sheet when available.
    pub include_indicator_info: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            rows_per_sheet: DEFAULT_ROWS_PER_SHEET,
            split_by_indicator: false,
            include_indicator_info: true,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows_per_sheet(mut self, rows: usize) -> Self {
        self.rows_per_sheet = rows.max(1);
        self
    }

    pub fn with_split_by_indicator(mut self, enable: bool) -> Self {
        self.split_by_indicator = enable;
        self
    }

    pub fn with_indicator_info(mut self, enable: bool) -> Self {
        self.include_indicator_info = enable;
        self
    }
}
