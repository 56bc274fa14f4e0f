//! Wide-table CSV reading with NA-token normalization.

use std::path::Path;

use csv::ReaderBuilder;

use wdi_model::{CellValue, WideTable};

use crate::decode::decode_bytes;
use crate::error::{IngestError, Result};

/// Source strings normalized to [`CellValue::Missing`] at ingest.
pub const NA_TOKENS: [&str; 4] = ["..", "NA", "N/A", "#N/A"];

/// Maximum file size for CSV loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads a delimited text file into a [`WideTable`].
///
/// Headers are trimmed; ragged rows are padded or truncated to the header
/// width; NA tokens and blank cells become explicit missing values.
pub fn read_wide_table(path: &Path) -> Result<WideTable> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (text, encoding) = decode_bytes(&bytes, path)?;
    tracing::debug!(path = %path.display(), encoding, "decoded CSV file");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut table = WideTable::new(headers, path.to_path_buf());
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row: Vec<CellValue> = record.iter().take(table.width()).map(parse_cell).collect();
        row.resize(table.width(), CellValue::Missing);
        table.rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded wide table"
    );
    Ok(table)
}

/// Like [`read_wide_table`], but rejects files with a header and no data.
pub fn read_required_table(path: &Path) -> Result<WideTable> {
    let table = read_wide_table(path)?;
    if table.height() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}
