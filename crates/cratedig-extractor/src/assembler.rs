//! Accumulates expanded entries into the output document

use cratedig_domain::{Collection, ReleaseEntry};

/// Ordered accumulator for [`ReleaseEntry`] values
///
/// Stream order is kept as-is: no sorting, no deduplication.
#[derive(Debug, Default)]
pub struct CollectionAssembler {
    entries: Vec<ReleaseEntry>,
}

impl CollectionAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the entries of one release
    pub fn push(&mut self, entries: impl IntoIterator<Item = ReleaseEntry>) {
        self.entries.extend(entries);
    }

    /// Entries collected so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wrap the collected entries in the document envelope
    pub fn finish(self) -> Collection {
        Collection {
            releases: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cratedig_domain::{Annotation, Release, ReleaseId};

    fn entry(id: i64) -> ReleaseEntry {
        ReleaseEntry::new(Release::new(ReleaseId::new(id)), &Annotation::default())
    }

    #[test]
    fn test_keeps_push_order() {
        let mut assembler = CollectionAssembler::new();
        assembler.push(vec![entry(3), entry(3)]);
        assembler.push(vec![entry(1)]);
        assembler.push(Vec::new());

        assert_eq!(assembler.len(), 3);
        let ids: Vec<i64> = assembler
            .finish()
            .releases
            .iter()
            .map(|entry| entry.release.id.value())
            .collect();
        assert_eq!(ids, vec![3, 3, 1]);
    }

    #[test]
    fn test_empty_document() {
        let assembler = CollectionAssembler::new();
        assert!(assembler.is_empty());
        assert!(assembler.finish().is_empty());
    }
}
