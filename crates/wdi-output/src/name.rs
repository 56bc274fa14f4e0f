//! Sheet naming: sanitization, truncation, deduplication.

use std::collections::BTreeSet;

use wdi_model::SHEET_NAME_MAX_LEN;

/// Characters Excel forbids in sheet names.
const INVALID_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Allocates unique, format-legal sheet names for one workbook.
///
/// Names are sanitized, truncated to the 31-character limit, and
/// deduplicated case-insensitively (Excel treats `GDP` and `gdp` as the
/// same sheet) by appending a numeric suffix inside the length budget.
#[derive(Debug, Default)]
pub struct SheetNamer {
    taken: BTreeSet<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a unique sheet name derived from `base` and reserves it.
    pub fn unique(&mut self, base: &str) -> String {
        let sanitized = sanitize_sheet_name(base);
        let candidate = truncate_chars(&sanitized, SHEET_NAME_MAX_LEN);
        if self.reserve(&candidate) {
            return candidate;
        }

        for suffix in 1usize.. {
            let digits = suffix.to_string();
            let budget = SHEET_NAME_MAX_LEN.saturating_sub(digits.len()).max(1);
            let candidate = format!("{}{digits}", truncate_chars(&sanitized, budget));
            if self.reserve(&candidate) {
                return candidate;
            }
        }
        unreachable!("suffix search is unbounded");
    }

    fn reserve(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_lowercase())
    }
}

/// Replaces forbidden characters and guards against empty names.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .trim_matches('\'')
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    }
}

fn truncate_chars(name: &str, limit: usize) -> String {
    name.chars().take(limit).collect()
}
