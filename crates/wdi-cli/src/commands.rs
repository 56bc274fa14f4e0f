use anyhow::Result;
use comfy_table::{Attribute, Cell, Table};
use tracing::info_span;

use wdi_ingest::{SchemaHints, detect_schema, read_required_table};
use wdi_model::{ExportOptions, MissingValuePolicy, ReshapeOptions};

use crate::cli::{ExportArgs, InspectArgs, SchemaArgs};
use crate::pipeline::{ReshapeResult, export, ingest, reshape, write_report_json};
use crate::summary::{apply_table_style, print_preview};
use crate::types::RunResult;

pub fn run_export(args: &ExportArgs) -> Result<RunResult> {
    let span = info_span!("export", main = %args.main_csv.display());
    let _guard = span.enter();

    let hints = schema_hints(&args.schema);
    let metadata_attributes =
        (!args.metadata_columns.is_empty()).then_some(&args.metadata_columns[..]);
    let ingested = ingest(
        &args.main_csv,
        args.metadata.as_deref(),
        &hints,
        &args.metadata_key,
        metadata_attributes,
    )?;

    let reshape_options = ReshapeOptions::new().with_missing_values(if args.drop_missing {
        MissingValuePolicy::Drop
    } else {
        MissingValuePolicy::Keep
    });
    let ReshapeResult {
        long,
        catalog,
        mut report,
    } = reshape(&ingested, &reshape_options);

    print_preview(&long);

    let export_options = ExportOptions::new()
        .with_rows_per_sheet(args.rows_per_sheet)
        .with_split_by_indicator(args.split_by_indicator)
        .with_indicator_info(!args.no_indicator_info);
    report.sheets = export(&long, &catalog, &export_options, &args.output)?;

    if let Some(path) = &args.report_json {
        write_report_json(&report, path)?;
    }

    Ok(RunResult {
        output: args.output.clone(),
        report,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let table = read_required_table(&args.main_csv)?;
    let schema = detect_schema(&table, &schema_hints(&args.schema))?;

    let mut out = Table::new();
    apply_table_style(&mut out);
    out.set_header(vec![
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Column").add_attribute(Attribute::Bold),
    ]);
    out.add_row(vec!["Entity", table.columns[schema.entity_id].as_str()]);
    out.add_row(vec!["Indicator", table.columns[schema.indicator_code].as_str()]);
    if let Some(idx) = schema.indicator_name {
        out.add_row(vec!["Indicator name", table.columns[idx].as_str()]);
    }
    let years: Vec<i32> = schema.year_columns.iter().map(|col| col.year).collect();
    let year_range = match (years.iter().min(), years.iter().max()) {
        (Some(first), Some(last)) => format!("{first}..{last} ({} columns)", years.len()),
        _ => "none".to_string(),
    };
    out.add_row(vec!["Years".to_string(), year_range]);
    out.add_row(vec!["Rows".to_string(), table.height().to_string()]);
    out.add_row(vec![
        "Identifier columns".to_string(),
        schema.id_columns.len().to_string(),
    ]);
    println!("{out}");
    Ok(())
}

fn schema_hints(args: &SchemaArgs) -> SchemaHints {
    SchemaHints {
        entity_id: args.entity_column.clone(),
        indicator_code: args.indicator_column.clone(),
        indicator_name: args.indicator_name_column.clone(),
    }
}
