//! Release module - one catalog entry rebuilt from the export stream

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Catalog identifier of a release
///
/// The export stream carries it as the `id` attribute of each candidate
/// record; the collection side file carries it as a plain integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReleaseId(i64);

impl ReleaseId {
    /// Create a ReleaseId from a raw integer
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse a leading integer the way C's `atoi` reads it
    ///
    /// Leading whitespace and one sign are accepted, digits are consumed up to
    /// the first non-digit, and the rest of the input is ignored. Unlike
    /// `atoi`, input without any digit yields `None` instead of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cratedig_domain::ReleaseId;
    ///
    /// assert_eq!(ReleaseId::parse_leading("1234,Shelf A"), Some(ReleaseId::new(1234)));
    /// assert_eq!(ReleaseId::parse_leading("\"1234\""), None);
    /// ```
    pub fn parse_leading(input: &str) -> Option<Self> {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }

        let magnitude: i64 = unsigned[..digits].parse().ok()?;
        Some(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl FromStr for ReleaseId {
    type Err = String;

    /// Strict parse of a whole attribute value (surrounding whitespace allowed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid release id '{}': {}", s, e))
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One track of a release's track list
///
/// A track is only kept when it has a position; the extractor drops
/// position-less pseudo-tracks (headings, index tracks) before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Upper-cased side/position marker (e.g. `A1`, `2-05`)
    pub position: String,

    /// Track title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Compound artist credit for this track, when it differs per track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl Track {
    /// Create a track with just a position
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            title: None,
            artist: None,
        }
    }
}

/// A release rebuilt from a wanted subtree of the export
///
/// Mutable only while the extractor assembles it; afterwards it is cloned
/// once per owned copy during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    /// Catalog identifier
    pub id: ReleaseId,

    /// Release title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Genres in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,

    /// Compound artist credit (e.g. `A & B feat. C`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Track list in document order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<Track>,

    /// Publishing label name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Catalog number on that label
    #[serde(rename = "catno", skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,

    /// Four-digit release year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Release {
    /// Create an empty release for the given identifier
    pub fn new(id: ReleaseId) -> Self {
        Self {
            id,
            title: None,
            genres: Vec::new(),
            artist: None,
            tracks: Vec::new(),
            label: None,
            catalog_number: None,
            year: None,
        }
    }
}
