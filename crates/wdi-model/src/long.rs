use crate::CellValue;

/// One long-format record: the identifier cells of its source row, the year
/// taken from the melted column, and the coerced numeric value.
///
/// `id_values` is parallel to [`LongTable::id_columns`]; `attributes` is
/// parallel to [`LongTable::attribute_columns`] and stays empty until the
/// metadata merge runs.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    /// Identifier cells copied from the source row, source column order.
    pub id_values: Vec<CellValue>,
    /// Entity key, used for the metadata join.
    pub entity_id: String,
    /// Indicator code, used for per-indicator sheet grouping.
    pub indicator_code: String,
    pub year: i32,
    /// `None` marks an explicit missing value.
    pub value: Option<f64>,
    /// Metadata attribute cells, filled by the merge stage.
    pub attributes: Vec<CellValue>,
}

/// The long-format table produced by one reshape pass.
///
/// Row order is the deterministic iteration order: source row order, then
/// year columns in source order.
#[derive(Debug, Clone, Default)]
pub struct LongTable {
    /// Identifier column names carried over from the wide table.
    pub id_columns: Vec<String>,
    /// Metadata attribute column names, empty before the merge.
    pub attribute_columns: Vec<String>,
    pub records: Vec<LongRecord>,
}

impl LongTable {
    pub fn new(id_columns: Vec<String>) -> Self {
        Self {
            id_columns,
            attribute_columns: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Output header: identifier columns, `Year`, `Value`, then merged
    /// attribute columns.
    pub fn header(&self) -> Vec<String> {
        let mut header =
            Vec::with_capacity(self.id_columns.len() + 2 + self.attribute_columns.len());
        header.extend(self.id_columns.iter().cloned());
        header.push("Year".to_string());
        header.push("Value".to_string());
        header.extend(self.attribute_columns.iter().cloned());
        header
    }

    /// Builds the output cells for one record, in header order.
    pub fn record_cells(&self, record: &LongRecord) -> Vec<CellValue> {
        let mut cells =
            Vec::with_capacity(record.id_values.len() + 2 + self.attribute_columns.len());
        cells.extend(record.id_values.iter().cloned());
        cells.push(CellValue::Number(f64::from(record.year)));
        cells.push(match record.value {
            Some(value) => CellValue::Number(value),
            None => CellValue::Missing,
        });
        if record.attributes.is_empty() && !self.attribute_columns.is_empty() {
            // Records untouched by the merge still render a full row.
            cells.extend(std::iter::repeat_n(
                CellValue::Missing,
                self.attribute_columns.len(),
            ));
        } else {
            cells.extend(record.attributes.iter().cloned());
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entity: &str, indicator: &str, year: i32, value: Option<f64>) -> LongRecord {
        LongRecord {
            id_values: vec![
                CellValue::Text(entity.to_string()),
                CellValue::Text(indicator.to_string()),
            ],
            entity_id: entity.to_string(),
            indicator_code: indicator.to_string(),
            year,
            value,
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_header_order() {
        let mut table = LongTable::new(vec!["Country Code".into(), "Indicator Code".into()]);
        table.attribute_columns = vec!["Income Group".into()];
        assert_eq!(
            table.header(),
            vec!["Country Code", "Indicator Code", "Year", "Value", "Income Group"]
        );
    }

    #[test]
    fn test_record_cells_missing_value_and_attributes() {
        let mut table = LongTable::new(vec!["Country Code".into(), "Indicator Code".into()]);
        table.attribute_columns = vec!["Income Group".into()];
        let cells = table.record_cells(&record("ARG", "SP.POP.TOTL", 2019, None));
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[2], CellValue::Number(2019.0));
        assert_eq!(cells[3], CellValue::Missing);
        assert_eq!(cells[4], CellValue::Missing);
    }
}
