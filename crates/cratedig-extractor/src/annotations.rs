//! Collection side file: identifier → annotations lookup
//!
//! The side file is a comma-separated export with one header row. Fields are
//! located by counting unquoted commas; a `"` toggles the quoted state and
//! there is no escaped-quote handling beyond that.

use crate::config::AnnotationColumns;
use crate::error::ExtractError;
use cratedig_domain::{Annotation, ReleaseId};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static COPY_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\[(.+)\].*$").expect("copy note pattern is valid"));

/// Read-only mapping from release identifier to its owned copies
///
/// Insertion order per identifier is file order. Duplicates are kept: the
/// same release may be owned more than once.
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    entries: HashMap<ReleaseId, Vec<Annotation>>,
    skipped_rows: usize,
}

impl AnnotationIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the side file at `path`
    ///
    /// Fails with [`ExtractError::Resource`] when the file cannot be read.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn from_path(path: &Path, columns: AnnotationColumns) -> Result<Self, ExtractError> {
        let bytes = fs::read(path).map_err(|source| ExtractError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::parse(&String::from_utf8_lossy(&bytes), columns);

        info!(
            "Loaded {} annotations for {} releases from {}",
            index.total_annotations(),
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Build an index from side-file text (header row included)
    pub fn parse(text: &str, columns: AnnotationColumns) -> Self {
        let mut index = Self::new();

        for (line_no, line) in text.split('\n').enumerate().skip(1) {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let fields = split_fields(line);
            let id = fields
                .get(columns.id)
                .and_then(|field| ReleaseId::parse_leading(field));

            let Some(id) = id else {
                warn!("Collection file line {}: no release id, row ignored", line_no + 1);
                index.skipped_rows += 1;
                continue;
            };

            let location = fields
                .get(columns.location)
                .map(|field| field.trim().to_string())
                .unwrap_or_default();
            let note = fields
                .get(columns.note)
                .and_then(|field| extract_copy_note(field))
                .unwrap_or_default();

            debug!("Collection file: release {} \"{}\"", id, note);
            index.insert(id, Annotation { location, note });
        }

        index
    }

    /// Append an annotation for `id`
    pub fn insert(&mut self, id: ReleaseId, annotation: Annotation) {
        self.entries.entry(id).or_default().push(annotation);
    }

    /// Whether `id` is wanted
    pub fn contains(&self, id: ReleaseId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Annotations for `id` in file order; empty when `id` is not wanted
    pub fn get(&self, id: ReleaseId) -> &[Annotation] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over wanted identifiers (unordered)
    pub fn ids(&self) -> impl Iterator<Item = ReleaseId> + '_ {
        self.entries.keys().copied()
    }

    /// Number of distinct wanted identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is wanted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of annotations across all identifiers
    pub fn total_annotations(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Rows dropped because their identifier field was unparseable
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Split a row on commas outside quoted spans
///
/// Quote characters stay in the returned fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    fields
}

/// Pull the bracketed copy note out of a notes field
fn extract_copy_note(field: &str) -> Option<String> {
    COPY_NOTE
        .captures(field)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
