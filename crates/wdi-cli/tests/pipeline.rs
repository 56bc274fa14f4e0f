//! End-to-end tests for the export pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use wdi_cli::pipeline::{export, ingest, reshape, write_report_json};
use wdi_ingest::SchemaHints;
use wdi_model::{CellValue, ExportOptions, ReshapeOptions};

const MAIN_CSV: &str = "\
Country Name,Country Code,Indicator Name,Indicator Code,2000,2001,2002
Argentina,ARG,\"Population, total\",SP.POP.TOTL,37057452,37471509,..
Australia,AUS,\"Population, total\",SP.POP.TOTL,19028802,19274701,19495210
Argentina,ARG,GDP (current US$),NY.GDP.MKTP.CD,284203750000,268696750000,bad
";

const COUNTRY_CSV: &str = "\
Country Code,Region,Income Group
ARG,Latin America & Caribbean,Upper middle income
";

fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_pipeline_end_to_end() {
    let dir = TempDir::new().unwrap();
    let main_csv = write_fixture(dir.path(), "data_main.csv", MAIN_CSV);
    let country_csv = write_fixture(dir.path(), "data_country.csv", COUNTRY_CSV);
    let output = dir.path().join("output.xlsx");

    let ingested = ingest(
        &main_csv,
        Some(&country_csv),
        &SchemaHints::default(),
        "Country Code",
        None,
    )
    .unwrap();
    assert!(ingested.metadata.is_some());

    let mut result = reshape(&ingested, &ReshapeOptions::default());

    // 3 source rows x 3 year columns, nothing dropped.
    assert_eq!(result.long.len(), 9);
    assert_eq!(result.report.missing_values, 2);
    assert_eq!(result.report.coerced_cells, 1);
    assert_eq!(result.report.matched_entities, 1);
    assert_eq!(result.report.unmatched_entities, 1);
    assert_eq!(result.catalog.len(), 2);

    // AUS has no metadata row; its attributes must be missing, not absent.
    let aus = result
        .long
        .records
        .iter()
        .find(|record| record.entity_id == "AUS")
        .unwrap();
    assert_eq!(
        aus.attributes,
        vec![CellValue::Missing, CellValue::Missing]
    );

    let sheets = export(
        &result.long,
        &result.catalog,
        &ExportOptions::default(),
        &output,
    )
    .unwrap();
    assert!(output.exists());
    assert_eq!(sheets.len(), 2); // Part1 + Indicator_Info
    assert_eq!(sheets[0].rows, 9);

    result.report.sheets = sheets;
    let report_path = dir.path().join("report.json");
    write_report_json(&result.report, &report_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["records"], 9);
    assert_eq!(json["sheets"][0]["name"], "Part1");
}

#[test]
fn test_pipeline_split_by_indicator() {
    let dir = TempDir::new().unwrap();
    let main_csv = write_fixture(dir.path(), "data_main.csv", MAIN_CSV);
    let output = dir.path().join("split.xlsx");

    let ingested = ingest(&main_csv, None, &SchemaHints::default(), "Country Code", None).unwrap();
    let result = reshape(&ingested, &ReshapeOptions::default());

    let options = ExportOptions::new()
        .with_split_by_indicator(true)
        .with_indicator_info(false);
    let sheets = export(&result.long, &result.catalog, &options, &output).unwrap();

    let names: Vec<&str> = sheets.iter().map(|sheet| sheet.name.as_str()).collect();
    assert_eq!(names, vec!["SP.POP.TOTL", "NY.GDP.MKTP.CD"]);
    assert_eq!(sheets[0].rows, 6);
    assert_eq!(sheets[1].rows, 3);
}

#[test]
fn test_pipeline_missing_metadata_is_non_fatal() {
    let dir = TempDir::new().unwrap();
    let main_csv = write_fixture(dir.path(), "data_main.csv", MAIN_CSV);
    let missing = dir.path().join("does_not_exist.csv");

    let ingested = ingest(
        &main_csv,
        Some(&missing),
        &SchemaHints::default(),
        "Country Code",
        None,
    )
    .unwrap();
    assert!(ingested.metadata.is_none());

    let result = reshape(&ingested, &ReshapeOptions::default());
    assert_eq!(result.long.len(), 9);
    assert!(result.long.attribute_columns.is_empty());
}

#[test]
fn test_pipeline_missing_main_file_is_fatal() {
    let missing = Path::new("/nonexistent/data_main.csv");
    let result = ingest(missing, None, &SchemaHints::default(), "Country Code", None);
    assert!(result.is_err());
}
