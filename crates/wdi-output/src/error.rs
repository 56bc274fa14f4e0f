//! Error types for workbook output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or persist the output file.
    #[error("failed to write output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The xlsx writer rejected the workbook content.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Sheet geometry exceeds what the format can address.
    #[error("sheet {sheet} exceeds format limits: {message}")]
    SheetLimit { sheet: String, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
