//! Entity metadata loading.
//!
//! The metadata file is a delimited table with one row per entity (for WDI
//! data, the country file). Rows are keyed by the entity-id column;
//! duplicate keys keep the last row.

use std::path::Path;

use wdi_model::{CellValue, MetadataTable};

use crate::error::{IngestError, Result};
use crate::read::read_wide_table;

/// Loads entity metadata keyed by the column matching `key_hint`.
///
/// `attributes` restricts the merged columns; `None` takes every non-key
/// column in file order. Requested attributes that do not exist in the file
/// are a [`IngestError::MissingColumn`] error.
pub fn read_metadata_table(
    path: &Path,
    key_hint: &str,
    attributes: Option<&[String]>,
) -> Result<MetadataTable> {
    let table = read_wide_table(path)?;

    let key_col = table
        .find_column(key_hint)
        .ok_or_else(|| IngestError::MissingColumn {
            role: "metadata key",
            column: key_hint.to_string(),
            path: path.to_path_buf(),
        })?;

    let attribute_indices: Vec<usize> = match attributes {
        Some(requested) => {
            let mut indices = Vec::with_capacity(requested.len());
            for name in requested {
                let idx =
                    table
                        .find_column(name)
                        .ok_or_else(|| IngestError::MissingColumn {
                            role: "metadata attribute",
                            column: name.clone(),
                            path: path.to_path_buf(),
                        })?;
                indices.push(idx);
            }
            indices
        }
        None => (0..table.width()).filter(|&idx| idx != key_col).collect(),
    };

    let attribute_columns: Vec<String> = attribute_indices
        .iter()
        .map(|&idx| table.columns[idx].clone())
        .collect();

    let mut metadata = MetadataTable::new(table.columns[key_col].clone(), attribute_columns);
    for row in &table.rows {
        let Some(key) = row[key_col].as_text() else {
            // Rows without an entity key cannot participate in the join.
            continue;
        };
        let values: Vec<CellValue> = attribute_indices
            .iter()
            .map(|&idx| row[idx].clone())
            .collect();
        metadata.insert(key, values);
    }

    tracing::debug!(
        path = %path.display(),
        entities = metadata.len(),
        attributes = metadata.attribute_columns.len(),
        "loaded entity metadata"
    );
    Ok(metadata)
}
