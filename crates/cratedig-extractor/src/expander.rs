//! Cross-product of a release with its owned copies

use crate::annotations::AnnotationIndex;
use cratedig_domain::{Release, ReleaseEntry};

/// Emit one entry per annotation of `release`, in side-file order
///
/// An identifier without annotations yields no entries.
pub fn expand(release: Release, index: &AnnotationIndex) -> Vec<ReleaseEntry> {
    index
        .get(release.id)
        .iter()
        .map(|annotation| ReleaseEntry::new(release.clone(), annotation))
        .collect()
}
