//! Result types for an extraction run

use cratedig_domain::{Collection, ReleaseId};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The assembled document
    pub collection: Collection,

    /// Counters and unmatched identifiers
    pub summary: ExtractionSummary,
}

/// Statistics collected while walking the export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Candidate records seen under the container
    pub records_scanned: u64,

    /// Candidate records whose identifier was wanted
    pub releases_matched: u64,

    /// Entries emitted into the document
    pub entries_emitted: usize,

    /// Wanted identifiers never seen in the export, ascending
    pub missing: Vec<ReleaseId>,
}

impl ExtractionSummary {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one candidate record
    pub fn record_scanned(&mut self) {
        self.records_scanned += 1;
    }

    /// Record a matched release and the entries it produced
    pub fn record_match(&mut self, entries: usize) {
        self.releases_matched += 1;
        self.entries_emitted += entries;
    }

    /// Whether every wanted identifier was found
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }

    /// One-line report of the run
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Scanned {} releases, matched {}, wrote {} entries",
            self.records_scanned, self.releases_matched, self.entries_emitted
        );
        if self.all_found() {
            line.push_str("; found all releases that are in the collection");
        } else {
            line.push_str(&format!("; {} collection releases not found", self.missing.len()));
        }
        line
    }

    /// Comma-separated missing identifiers
    pub fn missing_list(&self) -> String {
        self.missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut summary = ExtractionSummary::new();
        summary.record_scanned();
        summary.record_scanned();
        summary.record_match(3);

        assert_eq!(summary.records_scanned, 2);
        assert_eq!(summary.releases_matched, 1);
        assert_eq!(summary.entries_emitted, 3);
    }

    #[test]
    fn test_summary_all_found() {
        let summary = ExtractionSummary::new();
        assert!(summary.all_found());
        assert!(summary
            .summary()
            .ends_with("found all releases that are in the collection"));
    }

    #[test]
    fn test_summary_with_missing() {
        let summary = ExtractionSummary {
            missing: vec![ReleaseId::new(4), ReleaseId::new(9)],
            ..Default::default()
        };
        assert!(!summary.all_found());
        assert!(summary.summary().contains("2 collection releases not found"));
        assert_eq!(summary.missing_list(), "4, 9");
    }
}
