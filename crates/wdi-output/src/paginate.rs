//! Sheet pagination planning.

use std::collections::BTreeMap;
use std::ops::Range;

use wdi_model::{ExportOptions, LongTable};

use crate::name::SheetNamer;

/// Base-name length for single-page indicator sheets.
const INDICATOR_NAME_LEN: usize = 28;
/// Base-name length for paginated indicator sheets, before the `_p{n}` tag.
const INDICATOR_PART_LEN: usize = 20;

/// One planned sheet: its final name and the long-table row indices it
/// holds, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub name: String,
    pub rows: Vec<usize>,
}

/// Splits `row_count` rows into contiguous pages of at most `cap` rows.
pub fn plan_pages(row_count: usize, cap: usize) -> Vec<Range<usize>> {
    assert!(cap > 0, "rows-per-sheet cap must be positive");
    let mut pages = Vec::with_capacity(row_count.div_ceil(cap));
    let mut start = 0;
    while start < row_count {
        let end = (start + cap).min(row_count);
        pages.push(start..end);
        start = end;
    }
    pages
}

/// Plans the data sheets for a long table.
///
/// Paged mode slices the whole table into `Part{n}` sheets. Per-indicator
/// mode gathers each indicator's rows (first-seen order, original row order
/// within a group) and paginates each group independently. Both modes
/// produce at least one sheet so the workbook is never empty.
pub fn plan_sheets(
    long: &LongTable,
    options: &ExportOptions,
    namer: &mut SheetNamer,
) -> Vec<SheetPlan> {
    let cap = options.rows_per_sheet.max(1);
    let mut plans = Vec::new();

    if options.split_by_indicator {
        for (code, rows) in indicator_groups(long) {
            let pages = plan_pages(rows.len(), cap);
            if pages.len() == 1 {
                let base: String = code.chars().take(INDICATOR_NAME_LEN).collect();
                plans.push(SheetPlan {
                    name: namer.unique(&base),
                    rows,
                });
            } else {
                for (page_idx, page) in pages.into_iter().enumerate() {
                    let prefix: String = code.chars().take(INDICATOR_PART_LEN).collect();
                    plans.push(SheetPlan {
                        name: namer.unique(&format!("{prefix}_p{}", page_idx + 1)),
                        rows: rows[page].to_vec(),
                    });
                }
            }
        }
    } else {
        for (page_idx, page) in plan_pages(long.len(), cap).into_iter().enumerate() {
            plans.push(SheetPlan {
                name: namer.unique(&format!("Part{}", page_idx + 1)),
                rows: page.collect(),
            });
        }
    }

    if plans.is_empty() {
        // Header-only sheet; a workbook with zero sheets is not valid xlsx.
        plans.push(SheetPlan {
            name: namer.unique("Part1"),
            rows: Vec::new(),
        });
    }
    plans
}

/// Groups row indices by indicator code, first-seen order.
fn indicator_groups(long: &LongTable) -> Vec<(String, Vec<usize>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, record) in long.records.iter().enumerate() {
        let entry = groups.entry(record.indicator_code.clone()).or_insert_with(|| {
            order.push(record.indicator_code.clone());
            Vec::new()
        });
        entry.push(idx);
    }
    order
        .into_iter()
        .map(|code| {
            let rows = groups.remove(&code).unwrap_or_default();
            (code, rows)
        })
        .collect()
}
