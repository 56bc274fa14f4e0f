//! Export pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the wide CSV, detect its schema, load metadata
//! 2. **Reshape**: melt to long format, merge metadata, extract the catalog
//! 3. **Export**: paginate into sheets and write the workbook
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; the full long table is materialized before export begins.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use wdi_ingest::{SchemaHints, detect_schema, read_metadata_table, read_required_table};
use wdi_model::{
    ExportOptions, IndicatorCatalog, LongTable, MetadataTable, ReshapeOptions, ReshapeReport,
    WideSchema, WideTable, WrittenSheet,
};
use wdi_output::write_workbook;
use wdi_transform::{indicator_catalog, melt, merge_metadata};

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub table: WideTable,
    pub schema: WideSchema,
    /// Loaded metadata, `None` when unavailable (non-fatal).
    pub metadata: Option<MetadataTable>,
}

/// Reads and validates the source files.
///
/// The main CSV is required and any failure there is fatal. The metadata
/// file is optional: a missing or unreadable file logs a warning and the
/// run continues without the merge.
pub fn ingest(
    main_csv: &Path,
    metadata_path: Option<&Path>,
    hints: &SchemaHints,
    metadata_key: &str,
    metadata_attributes: Option<&[String]>,
) -> Result<IngestResult> {
    let table = read_required_table(main_csv).context("read main dataset")?;
    let schema = detect_schema(&table, hints).context("detect schema")?;
    info!(
        rows = table.height(),
        year_columns = schema.year_columns.len(),
        "main dataset loaded"
    );

    let metadata = metadata_path.and_then(|path| {
        match read_metadata_table(path, metadata_key, metadata_attributes) {
            Ok(metadata) => Some(metadata),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "metadata unavailable, continuing without merge"
                );
                None
            }
        }
    });

    Ok(IngestResult {
        table,
        schema,
        metadata,
    })
}

/// Result of the reshape stage.
#[derive(Debug)]
pub struct ReshapeResult {
    pub long: LongTable,
    pub catalog: IndicatorCatalog,
    pub report: ReshapeReport,
}

/// Melts the wide table, merges metadata, and extracts the catalog.
pub fn reshape(ingest: &IngestResult, options: &ReshapeOptions) -> ReshapeResult {
    let (mut long, mut report) = melt(&ingest.table, &ingest.schema, options);
    if let Some(metadata) = &ingest.metadata {
        merge_metadata(&mut long, metadata, &mut report);
    }
    let catalog = indicator_catalog(&ingest.table, &ingest.schema);
    ReshapeResult {
        long,
        catalog,
        report,
    }
}

/// Writes the workbook and returns the written sheets.
pub fn export(
    long: &LongTable,
    catalog: &IndicatorCatalog,
    options: &ExportOptions,
    output: &Path,
) -> Result<Vec<WrittenSheet>> {
    let sheets = write_workbook(long, catalog, options, output).context("write workbook")?;
    Ok(sheets)
}

/// Serializes the run report as pretty JSON.
pub fn write_report_json(report: &ReshapeReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write report: {}", path.display()))?;
    info!(path = %path.display(), "run report written");
    Ok(())
}
