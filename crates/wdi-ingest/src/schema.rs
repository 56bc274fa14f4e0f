//! Column-role detection for wide tables.

use wdi_model::{WideSchema, WideTable, YearColumn, extract_year};

use crate::error::{IngestError, Result};

/// Header fragments used to locate the key columns of a wide table.
///
/// Matching is case-insensitive substring search on trimmed headers, so the
/// WDI defaults also match headers like `"Country Code "` or
/// `"country code"`.
#[derive(Debug, Clone)]
pub struct SchemaHints {
    /// Entity identifier header fragment.
    pub entity_id: String,
    /// Indicator code header fragment.
    pub indicator_code: String,
    /// Indicator display-name header fragment.
    pub indicator_name: String,
}

impl Default for SchemaHints {
    fn default() -> Self {
        Self {
            entity_id: "Country Code".to_string(),
            indicator_code: "Indicator Code".to_string(),
            indicator_name: "Indicator Name".to_string(),
        }
    }
}

/// Resolves column roles for a wide table.
///
/// Year columns are any whose header carries a standalone 4-digit year
/// token; everything else is an identifier column. The entity and indicator
/// columns are required; the indicator-name column is optional.
pub fn detect_schema(table: &WideTable, hints: &SchemaHints) -> Result<WideSchema> {
    let year_columns: Vec<YearColumn> = table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(index, name)| extract_year(name).map(|year| YearColumn { index, year }))
        .collect();

    if year_columns.is_empty() {
        return Err(IngestError::NoYearColumns {
            path: table.source.clone(),
        });
    }

    let is_year = |idx: usize| year_columns.iter().any(|col| col.index == idx);
    let id_columns: Vec<usize> = (0..table.width()).filter(|&idx| !is_year(idx)).collect();

    let entity_id = find_id_column(table, &id_columns, &hints.entity_id, "entity")?;
    let indicator_code = find_id_column(table, &id_columns, &hints.indicator_code, "indicator")?;
    let indicator_name = id_columns.iter().copied().find(|&idx| {
        table.columns[idx]
            .to_lowercase()
            .contains(&hints.indicator_name.to_lowercase())
    });

    tracing::debug!(
        entity = %table.columns[entity_id],
        indicator = %table.columns[indicator_code],
        year_columns = year_columns.len(),
        "detected wide schema"
    );

    Ok(WideSchema {
        entity_id,
        indicator_code,
        indicator_name,
        id_columns,
        year_columns,
    })
}

fn find_id_column(
    table: &WideTable,
    id_columns: &[usize],
    needle: &str,
    role: &'static str,
) -> Result<usize> {
    let lowered = needle.to_lowercase();
    id_columns
        .iter()
        .copied()
        .find(|&idx| table.columns[idx].to_lowercase().contains(&lowered))
        .ok_or_else(|| IngestError::MissingColumn {
            role,
            column: needle.to_string(),
            path: table.source.clone(),
        })
}
