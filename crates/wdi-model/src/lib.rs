//! Core data model for the indicator reshaping pipeline.
//!
//! This crate defines the types shared across ingestion, transformation,
//! and output: cell values, the wide source table and its detected schema,
//! the long-format table, entity metadata, and run options/reports.

mod catalog;
mod cell;
mod long;
mod metadata;
mod options;
mod report;
mod table;

pub use catalog::IndicatorCatalog;
pub use cell::CellValue;
pub use long::{LongRecord, LongTable};
pub use metadata::MetadataTable;
pub use options::{ExportOptions, MissingValuePolicy, ReshapeOptions, SHEET_NAME_MAX_LEN};
pub use report::{ReshapeReport, WrittenSheet};
pub use table::{WideSchema, WideTable, YearColumn, extract_year};
