use std::collections::BTreeSet;

/// Deduplicated (indicator code, indicator name) pairs, first-seen order.
///
/// Exported as the trailing `Indicator_Info` sheet of the workbook.
#[derive(Debug, Clone, Default)]
pub struct IndicatorCatalog {
    entries: Vec<(String, Option<String>)>,
    seen: BTreeSet<String>,
}

impl IndicatorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an indicator. The first occurrence of a code wins; later
    /// occurrences (including ones with a different name) are ignored.
    pub fn record(&mut self, code: &str, name: Option<&str>) {
        if code.is_empty() || !self.seen.insert(code.to_string()) {
            return;
        }
        self.entries
            .push((code.to_string(), name.map(ToString::to_string)));
    }

    pub fn entries(&self) -> &[(String, Option<String>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_and_dedup() {
        let mut catalog = IndicatorCatalog::new();
        catalog.record("SP.POP.TOTL", Some("Population, total"));
        catalog.record("NY.GDP.MKTP.CD", Some("GDP (current US$)"));
        catalog.record("SP.POP.TOTL", Some("renamed"));
        catalog.record("", None);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].0, "SP.POP.TOTL");
        assert_eq!(
            catalog.entries()[0].1.as_deref(),
            Some("Population, total")
        );
        assert_eq!(catalog.entries()[1].0, "NY.GDP.MKTP.CD");
    }
}
