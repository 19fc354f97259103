//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Every variant is fatal for the run. Tolerated data-quality gaps (unmatched
/// identifiers, position-less tracks, symbolic dates, extra labels) never
/// surface as errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A required input could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Resource {
        /// Path of the input
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The token source reported malformed low-level structure
    #[error("Malformed input stream: {0}")]
    Stream(String),

    /// The document does not have the expected container layout
    #[error("Schema error: {0}")]
    Schema(String),

    /// The declared document encoding is not recognized
    #[error("Unsupported document encoding: {0}")]
    Encoding(String),

    /// A wanted record failed to parse
    #[error("Error parsing release {id}: {source}")]
    RecordParse {
        /// Raw identifier attribute of the offending record
        id: String,
        /// What went wrong inside the record
        #[source]
        source: Box<ExtractError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    /// Attach the raw identifier of the record being parsed
    pub fn in_record(self, id: impl Into<String>) -> Self {
        ExtractError::RecordParse {
            id: id.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error means an input could not be opened
    pub fn is_resource(&self) -> bool {
        matches!(self, ExtractError::Resource { .. })
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(e: quick_xml::Error) -> Self {
        ExtractError::Stream(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        ExtractError::Stream(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parse_message_carries_id() {
        let err = ExtractError::Schema("unexpected end of stream".to_string()).in_record("1234");
        assert_eq!(
            err.to_string(),
            "Error parsing release 1234: Schema error: unexpected end of stream"
        );
    }

    #[test]
    fn test_resource_classification() {
        let err = ExtractError::Resource {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_resource());
        assert!(err.to_string().contains("missing.csv"));
        assert!(!ExtractError::Stream("bad".to_string()).is_resource());
    }
}
