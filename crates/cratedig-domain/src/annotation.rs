//! Annotation module - side-file metadata for one owned copy

/// Collection annotation for one physical copy of a release
///
/// Read from one row of the collection side file. A release owned twice has
/// two annotations, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Collection folder the copy is filed under
    pub location: String,

    /// Bracketed copy note, empty when the notes column had no `[...]`
    pub note: String,
}

impl Annotation {
    /// Create a new annotation
    pub fn new(location: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            note: note.into(),
        }
    }
}
