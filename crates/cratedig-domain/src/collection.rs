//! Collection module - the output document

use crate::annotation::Annotation;
use crate::release::Release;
use serde::Serialize;

/// A release merged with one collection annotation
///
/// Serializes flat: the release fields followed by `folder` and `copynote`,
/// each omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseEntry {
    /// The base release, shared by all copies
    #[serde(flatten)]
    pub release: Release,

    /// Collection folder of this copy
    #[serde(rename = "folder", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Copy note of this copy
    #[serde(rename = "copynote", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ReleaseEntry {
    /// Merge one annotation into a copy of the release
    ///
    /// Empty annotation fields are dropped rather than carried as empty strings.
    pub fn new(release: Release, annotation: &Annotation) -> Self {
        Self {
            release,
            location: non_empty(&annotation.location),
            note: non_empty(&annotation.note),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The collection document: every matched copy in stream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collection {
    /// Entries in the order their releases appeared in the export
    pub releases: Vec<ReleaseEntry>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the collection has no entries
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
