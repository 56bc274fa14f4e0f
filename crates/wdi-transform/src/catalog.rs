//! Indicator catalog extraction.

use wdi_model::{IndicatorCatalog, WideSchema, WideTable};

/// Collects the deduplicated (code, name) pairs from a wide table, first
/// occurrence wins.
pub fn indicator_catalog(table: &WideTable, schema: &WideSchema) -> IndicatorCatalog {
    let mut catalog = IndicatorCatalog::new();
    for row in &table.rows {
        let Some(code) = row[schema.indicator_code].as_text() else {
            continue;
        };
        let name = schema
            .indicator_name
            .and_then(|idx| row[idx].as_text());
        catalog.record(code, name);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wdi_model::{CellValue, YearColumn};

    #[test]
    fn test_catalog_dedups_by_code() {
        let mut table = WideTable::new(
            vec![
                "Country Code".into(),
                "Indicator Name".into(),
                "Indicator Code".into(),
                "2000".into(),
            ],
            PathBuf::from("data_main.csv"),
        );
        for entity in ["ARG", "AUS"] {
            table.rows.push(vec![
                CellValue::Text(entity.into()),
                CellValue::Text("Population, total".into()),
                CellValue::Text("SP.POP.TOTL".into()),
                CellValue::Missing,
            ]);
        }
        let schema = WideSchema {
            entity_id: 0,
            indicator_code: 2,
            indicator_name: Some(1),
            id_columns: vec![0, 1, 2],
            year_columns: vec![YearColumn { index: 3, year: 2000 }],
        };

        let catalog = indicator_catalog(&table, &schema);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].0, "SP.POP.TOTL");
        assert_eq!(catalog.entries()[0].1.as_deref(), Some("Population, total"));
    }
}
