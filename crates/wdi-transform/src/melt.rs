//! Wide→long reshape.

use wdi_model::{
    CellValue, LongRecord, LongTable, MissingValuePolicy, ReshapeOptions, ReshapeReport,
    WideSchema, WideTable,
};

/// Melts a wide table into long format.
///
/// Iteration order is source row order, then year columns in source order,
/// which fixes the long-table row order for identical inputs. Every year
/// cell yields exactly one record unless `MissingValuePolicy::Drop` removes
/// it; dropped and coerced cells are counted, never fatal.
pub fn melt(
    table: &WideTable,
    schema: &WideSchema,
    options: &ReshapeOptions,
) -> (LongTable, ReshapeReport) {
    let mut long = LongTable::new(schema.id_column_names(table));
    let mut report = ReshapeReport::new();
    report.source_rows = table.height();
    report.year_columns = schema.year_columns.len();

    for row in &table.rows {
        let id_values: Vec<CellValue> = schema
            .id_columns
            .iter()
            .map(|&idx| row[idx].clone())
            .collect();
        let entity_id = row[schema.entity_id].as_text().unwrap_or_default().to_string();
        let indicator_code = row[schema.indicator_code]
            .as_text()
            .unwrap_or_default()
            .to_string();

        for year_col in &schema.year_columns {
            let cell = &row[year_col.index];
            let value = cell.as_number();
            if value.is_none() {
                if !cell.is_missing() {
                    report.coerced_cells += 1;
                }
                if options.missing_values == MissingValuePolicy::Drop {
                    report.dropped_records += 1;
                    continue;
                }
                report.missing_values += 1;
            }
            long.records.push(LongRecord {
                id_values: id_values.clone(),
                entity_id: entity_id.clone(),
                indicator_code: indicator_code.clone(),
                year: year_col.year,
                value,
                attributes: Vec::new(),
            });
        }
    }

    report.records = long.len();
    tracing::info!(
        source_rows = report.source_rows,
        year_columns = report.year_columns,
        records = report.records,
        coerced = report.coerced_cells,
        dropped = report.dropped_records,
        "reshaped wide table to long format"
    );
    (long, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wdi_model::YearColumn;

    fn table(rows: Vec<Vec<&str>>) -> (WideTable, WideSchema) {
        let mut table = WideTable::new(
            vec![
                "Country Code".into(),
                "Indicator Code".into(),
                "2000".into(),
                "2001".into(),
            ],
            PathBuf::from("data_main.csv"),
        );
        for row in rows {
            table.rows.push(
                row.into_iter()
                    .map(|value| {
                        if value.is_empty() {
                            CellValue::Missing
                        } else {
                            CellValue::Text(value.to_string())
                        }
                    })
                    .collect(),
            );
        }
        let schema = WideSchema {
            entity_id: 0,
            indicator_code: 1,
            indicator_name: None,
            id_columns: vec![0, 1],
            year_columns: vec![
                YearColumn { index: 2, year: 2000 },
                YearColumn { index: 3, year: 2001 },
            ],
        };
        (table, schema)
    }

    #[test]
    fn test_melt_emits_one_record_per_year_cell() {
        let (table, schema) = table(vec![
            vec!["ARG", "SP.POP.TOTL", "37", "38"],
            vec!["AUS", "SP.POP.TOTL", "19", "20"],
        ]);
        let (long, report) = melt(&table, &schema, &ReshapeOptions::default());

        assert_eq!(long.len(), 4);
        assert_eq!(report.records, 4);
        assert_eq!(report.missing_values, 0);
        assert_eq!(long.records[0].year, 2000);
        assert_eq!(long.records[1].year, 2001);
        assert_eq!(long.records[2].entity_id, "AUS");
    }

    #[test]
    fn test_melt_counts_coerced_cells() {
        let (table, schema) = table(vec![vec!["ARG", "SP.POP.TOTL", "not-a-number", ""]]);
        let (long, report) = melt(&table, &schema, &ReshapeOptions::default());

        assert_eq!(long.len(), 2);
        assert_eq!(report.coerced_cells, 1);
        assert_eq!(report.missing_values, 2);
        assert_eq!(long.records[0].value, None);
    }

    #[test]
    fn test_melt_drop_policy_removes_and_counts() {
        let (table, schema) = table(vec![vec!["ARG", "SP.POP.TOTL", "37", ""]]);
        let options = ReshapeOptions::new().with_missing_values(MissingValuePolicy::Drop);
        let (long, report) = melt(&table, &schema, &options);

        assert_eq!(long.len(), 1);
        assert_eq!(report.dropped_records, 1);
        assert_eq!(report.missing_values, 0);
        assert_eq!(long.records[0].value, Some(37.0));
    }
}
