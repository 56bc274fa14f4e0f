//! Metadata merge (left join on entity id).

use std::collections::BTreeSet;

use wdi_model::{CellValue, LongTable, MetadataTable, ReshapeReport};

/// Left-joins entity metadata into the long table.
///
/// Entities absent from the metadata table keep a full row of missing
/// attribute cells; nothing is filtered out. Matched and unmatched entity
/// counts land in the report.
pub fn merge_metadata(long: &mut LongTable, metadata: &MetadataTable, report: &mut ReshapeReport) {
    long.attribute_columns = metadata.attribute_columns.clone();

    let mut matched = BTreeSet::new();
    let mut unmatched = BTreeSet::new();
    for record in &mut long.records {
        match metadata.get(&record.entity_id) {
            Some(values) => {
                record.attributes = values.to_vec();
                matched.insert(record.entity_id.clone());
            }
            None => {
                record.attributes = vec![CellValue::Missing; metadata.attribute_columns.len()];
                unmatched.insert(record.entity_id.clone());
            }
        }
    }

    report.matched_entities = matched.len();
    report.unmatched_entities = unmatched.len();
    tracing::info!(
        matched = report.matched_entities,
        unmatched = report.unmatched_entities,
        attributes = long.attribute_columns.len(),
        "merged entity metadata"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_model::LongRecord;

    fn long_with_entities(entities: &[&str]) -> LongTable {
        let mut long = LongTable::new(vec!["Country Code".into()]);
        for entity in entities {
            long.records.push(LongRecord {
                id_values: vec![CellValue::Text(entity.to_string())],
                entity_id: entity.to_string(),
                indicator_code: "SP.POP.TOTL".to_string(),
                year: 2000,
                value: Some(1.0),
                attributes: Vec::new(),
            });
        }
        long
    }

    #[test]
    fn test_merge_fills_matched_and_unmatched() {
        let mut long = long_with_entities(&["ARG", "ZZZ", "ARG"]);
        let mut metadata = MetadataTable::new("Country Code", vec!["Income Group".into()]);
        metadata.insert("ARG", vec![CellValue::Text("Upper middle income".into())]);

        let mut report = ReshapeReport::new();
        merge_metadata(&mut long, &metadata, &mut report);

        assert_eq!(long.attribute_columns, vec!["Income Group"]);
        assert_eq!(
            long.records[0].attributes,
            vec![CellValue::Text("Upper middle income".into())]
        );
        assert_eq!(long.records[1].attributes, vec![CellValue::Missing]);
        assert_eq!(report.matched_entities, 1);
        assert_eq!(report.unmatched_entities, 1);
    }
}
