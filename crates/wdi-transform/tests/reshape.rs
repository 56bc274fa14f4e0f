//! Integration tests for the reshape pass: count preservation, ordering,
//! and the wide→long→wide round trip.

use std::collections::BTreeMap;
use std::path::PathBuf;

use wdi_model::{
    CellValue, MetadataTable, MissingValuePolicy, ReshapeOptions, ReshapeReport, WideSchema,
    WideTable, YearColumn,
};
use wdi_transform::{melt, merge_metadata};

fn wide_fixture(entities: usize, years: &[i32]) -> (WideTable, WideSchema) {
    let mut columns = vec!["Country Code".to_string(), "Indicator Code".to_string()];
    columns.extend(years.iter().map(ToString::to_string));
    let mut table = WideTable::new(columns, PathBuf::from("data_main.csv"));

    for entity_idx in 0..entities {
        let mut row = vec![
            CellValue::Text(format!("E{entity_idx:03}")),
            CellValue::Text("SP.POP.TOTL".to_string()),
        ];
        for (year_idx, year) in years.iter().enumerate() {
            row.push(CellValue::Text(
                (f64::from(*year) + entity_idx as f64 + year_idx as f64).to_string(),
            ));
        }
        table.rows.push(row);
    }

    let year_columns = years
        .iter()
        .enumerate()
        .map(|(offset, &year)| YearColumn {
            index: 2 + offset,
            year,
        })
        .collect();
    let schema = WideSchema {
        entity_id: 0,
        indicator_code: 1,
        indicator_name: None,
        id_columns: vec![0, 1],
        year_columns,
    };
    (table, schema)
}

#[test]
fn test_record_count_is_rows_times_year_columns() {
    let years: Vec<i32> = (1990..2000).collect();
    let (table, schema) = wide_fixture(7, &years);
    let (long, report) = melt(&table, &schema, &ReshapeOptions::default());

    assert_eq!(long.len(), 7 * years.len());
    assert_eq!(report.records, long.len());
    assert_eq!(report.source_rows, 7);
    assert_eq!(report.year_columns, years.len());
}

#[test]
fn test_missing_values_are_represented_not_dropped() {
    let (mut table, schema) = wide_fixture(2, &[2000, 2001]);
    table.rows[0][2] = CellValue::Missing;
    table.rows[1][3] = CellValue::Text("n/a".to_string());

    let (long, report) = melt(&table, &schema, &ReshapeOptions::default());

    assert_eq!(long.len(), 4);
    assert_eq!(report.missing_values, 2);
    assert_eq!(report.coerced_cells, 1);
}

#[test]
fn test_round_trip_rewiden_reproduces_values() {
    let years = [1990, 1991, 1992];
    let (table, schema) = wide_fixture(5, &years);
    let (long, _) = melt(&table, &schema, &ReshapeOptions::default());

    // Pivot the long records back into (entity, year) -> value.
    let mut rewidened: BTreeMap<(String, i32), Option<f64>> = BTreeMap::new();
    for record in &long.records {
        let previous = rewidened.insert((record.entity_id.clone(), record.year), record.value);
        assert!(previous.is_none(), "duplicate (entity, year) combination");
    }

    for row in &table.rows {
        let entity = row[0].as_text().unwrap().to_string();
        for year_col in &schema.year_columns {
            let original = row[year_col.index].as_number();
            assert_eq!(rewidened[&(entity.clone(), year_col.year)], original);
        }
    }
}

#[test]
fn test_melt_is_deterministic() {
    let (table, schema) = wide_fixture(4, &[2000, 2001, 2002]);
    let (first, _) = melt(&table, &schema, &ReshapeOptions::default());
    let (second, _) = melt(&table, &schema, &ReshapeOptions::default());

    assert_eq!(first.records, second.records);
    assert_eq!(first.header(), second.header());
}

#[test]
fn test_drop_policy_accounts_for_every_cell() {
    let (mut table, schema) = wide_fixture(3, &[2000, 2001]);
    table.rows[0][2] = CellValue::Missing;
    table.rows[2][3] = CellValue::Text("bad".to_string());

    let options = ReshapeOptions::new().with_missing_values(MissingValuePolicy::Drop);
    let (long, report) = melt(&table, &schema, &options);

    // Every source cell is either an emitted record or a counted drop.
    assert_eq!(long.len() + report.dropped_records, 3 * 2);
    assert_eq!(report.dropped_records, 2);
    assert!(long.records.iter().all(|record| record.value.is_some()));
}

#[test]
fn test_merge_keeps_unmatched_entities() {
    let (table, schema) = wide_fixture(2, &[2000]);
    let (mut long, mut report) = melt(&table, &schema, &ReshapeOptions::default());

    let mut metadata = MetadataTable::new("Country Code", vec!["Income Group".into()]);
    metadata.insert("E000", vec![CellValue::Text("High income".into())]);
    merge_metadata(&mut long, &metadata, &mut report);

    // E001 is absent from metadata but still present in the output.
    assert_eq!(long.len(), 2);
    assert_eq!(long.records[1].entity_id, "E001");
    assert_eq!(long.records[1].attributes, vec![CellValue::Missing]);
    assert_eq!(report.unmatched_entities, 1);
}

#[test]
fn test_merge_on_empty_report_defaults() {
    let report = ReshapeReport::new();
    assert_eq!(report.matched_entities, 0);
    assert_eq!(report.written_rows(), 0);
}
