//! Workbook writing.
//!
//! The workbook is assembled fully in memory and saved to a temporary file
//! in the destination directory, then renamed over the final path. A
//! failure at any point drops the temp file, so no partial output is ever
//! left behind.

use std::path::Path;

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};

use wdi_model::{CellValue, ExportOptions, IndicatorCatalog, LongTable, WrittenSheet};

use crate::error::{OutputError, Result};
use crate::name::SheetNamer;
use crate::paginate::{SheetPlan, plan_sheets};

/// Writes the long table (and optional indicator catalog) to `path`.
///
/// Returns the written sheets in workbook order. The creation timestamp is
/// pinned so identical inputs produce byte-identical files.
pub fn write_workbook(
    long: &LongTable,
    catalog: &IndicatorCatalog,
    options: &ExportOptions,
    path: &Path,
) -> Result<Vec<WrittenSheet>> {
    let mut namer = SheetNamer::new();
    let plans = plan_sheets(long, options, &mut namer);

    let mut workbook = Workbook::new();
    let creation = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&creation);
    workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let header = long.header();

    let mut written = Vec::with_capacity(plans.len());
    for plan in &plans {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&plan.name)?;
        write_data_sheet(worksheet, long, &header, plan, &header_format)?;
        tracing::debug!(sheet = %plan.name, rows = plan.rows.len(), "sheet filled");
        written.push(WrittenSheet {
            name: plan.name.clone(),
            rows: plan.rows.len(),
        });
    }

    if options.include_indicator_info && !catalog.is_empty() {
        let name = namer.unique("Indicator_Info");
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;
        write_catalog_sheet(worksheet, catalog, &header_format)?;
        written.push(WrittenSheet {
            name,
            rows: catalog.len(),
        });
    }

    save_atomically(&mut workbook, path)?;
    tracing::info!(
        path = %path.display(),
        sheets = written.len(),
        "workbook written"
    );
    Ok(written)
}

fn write_data_sheet(
    worksheet: &mut Worksheet,
    long: &LongTable,
    header: &[String],
    plan: &SheetPlan,
    header_format: &Format,
) -> Result<()> {
    for (col_idx, name) in header.iter().enumerate() {
        let col = column_index(&plan.name, col_idx)?;
        worksheet.write_string_with_format(0, col, name, header_format)?;
    }

    for (out_idx, &row_idx) in plan.rows.iter().enumerate() {
        let row = row_index(&plan.name, out_idx + 1)?;
        let cells = long.record_cells(&long.records[row_idx]);
        for (col_idx, cell) in cells.iter().enumerate() {
            let col = column_index(&plan.name, col_idx)?;
            match cell {
                CellValue::Text(value) => {
                    worksheet.write_string(row, col, value)?;
                }
                CellValue::Number(value) => {
                    worksheet.write_number(row, col, *value)?;
                }
                // Missing values stay blank, matching the long-table
                // contract of explicit-but-empty cells.
                CellValue::Missing => {}
            }
        }
    }
    Ok(())
}

fn write_catalog_sheet(
    worksheet: &mut Worksheet,
    catalog: &IndicatorCatalog,
    header_format: &Format,
) -> Result<()> {
    worksheet.write_string_with_format(0, 0, "Indicator Code", header_format)?;
    worksheet.write_string_with_format(0, 1, "Indicator Name", header_format)?;
    for (idx, (code, name)) in catalog.entries().iter().enumerate() {
        let row = row_index("Indicator_Info", idx + 1)?;
        worksheet.write_string(row, 0, code)?;
        if let Some(name) = name {
            worksheet.write_string(row, 1, name)?;
        }
    }
    Ok(())
}

/// Saves to a temp file in the destination directory, then renames over
/// `path`. The rename is atomic on the same filesystem; failure before it
/// completes leaves the destination untouched.
fn save_atomically(workbook: &mut Workbook, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = tempfile::Builder::new()
        .prefix(".indicator-export-")
        .suffix(".xlsx")
        .tempfile_in(dir)
        .map_err(|e| OutputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    workbook.save(temp.path())?;

    temp.persist(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

fn row_index(sheet: &str, idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| OutputError::SheetLimit {
        sheet: sheet.to_string(),
        message: format!("row index {idx} overflows the format"),
    })
}

fn column_index(sheet: &str, idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| OutputError::SheetLimit {
        sheet: sheet.to_string(),
        message: format!("column index {idx} overflows the format"),
    })
}
