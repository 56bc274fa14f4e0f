use std::collections::BTreeMap;

use crate::CellValue;

/// Entity metadata keyed by entity identifier.
///
/// Duplicate keys in the source file overwrite earlier entries: the last row
/// wins. This matches the join semantics of the reshape pipeline and is
/// covered by tests.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    /// Name of the key column in the metadata file.
    pub key_column: String,
    /// Attribute column names, file order.
    pub attribute_columns: Vec<String>,
    entries: BTreeMap<String, Vec<CellValue>>,
}

impl MetadataTable {
    pub fn new(key_column: impl Into<String>, attribute_columns: Vec<String>) -> Self {
        Self {
            key_column: key_column.into(),
            attribute_columns,
            entries: BTreeMap::new(),
        }
    }

    /// Inserts attribute values for an entity. A duplicate key replaces the
    /// previous entry (last one wins).
    pub fn insert(&mut self, entity_id: impl Into<String>, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.attribute_columns.len());
        self.entries.insert(entity_id.into(), values);
    }

    pub fn get(&self, entity_id: &str) -> Option<&[CellValue]> {
        self.entries.get(entity_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
