//! Indicator data ingestion utilities.
//!
//! This crate loads delimited source files into the shared data model:
//!
//! - **CSV loading**: encoding fallback (UTF-8 → Windows-1252), BOM
//!   handling, NA-token normalization
//! - **Schema detection**: locate entity/indicator columns and year columns
//! - **Metadata loading**: entity attribute tables with last-wins keys
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wdi_ingest::{SchemaHints, detect_schema, read_metadata_table, read_required_table};
//!
//! let table = read_required_table(Path::new("data_main.csv"))?;
//! let schema = detect_schema(&table, &SchemaHints::default())?;
//! let metadata = read_metadata_table(Path::new("data_country.csv"), "Country Code", None)?;
//! ```

mod decode;
mod error;
mod metadata;
mod read;
mod schema;

pub use decode::decode_bytes;
pub use error::{IngestError, Result};
pub use metadata::read_metadata_table;
pub use read::{
    MAX_CSV_FILE_SIZE, NA_TOKENS, check_file_size_with_limit, read_required_table, read_wide_table,
};
pub use schema::{SchemaHints, detect_schema};
