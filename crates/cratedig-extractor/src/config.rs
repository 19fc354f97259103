//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Zero-based field offsets of the collection side file
///
/// Offsets count unquoted commas, not header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationColumns {
    /// Field holding the release identifier
    pub id: usize,

    /// Field holding the collection folder
    pub location: usize,

    /// Field holding the free-text notes
    pub note: usize,
}

impl Default for AnnotationColumns {
    fn default() -> Self {
        Self {
            id: 7,
            location: 8,
            note: 12,
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Name of the single root container element
    #[serde(default = "default_container_element")]
    pub container_element: String,

    /// Attribute of each candidate record holding its identifier
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,

    /// Label name used when a label element carries none
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,

    /// Log progress every N candidate records (0 disables)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,

    /// Warn about wanted identifiers never seen in the stream
    #[serde(default = "default_true")]
    pub report_missing: bool,

    /// Side-file column layout
    #[serde(default)]
    pub columns: AnnotationColumns,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.container_element.trim().is_empty() {
            return Err("container_element must not be empty".to_string());
        }
        if self.id_attribute.trim().is_empty() {
            return Err("id_attribute must not be empty".to_string());
        }
        let columns = &self.columns;
        if columns.id == columns.location || columns.id == columns.note || columns.location == columns.note {
            return Err(format!(
                "columns must be distinct (id: {}, location: {}, note: {})",
                columns.id, columns.location, columns.note
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            container_element: default_container_element(),
            id_attribute: default_id_attribute(),
            unknown_label: default_unknown_label(),
            progress_interval: default_progress_interval(),
            report_missing: true,
            columns: AnnotationColumns::default(),
        }
    }
}

fn default_container_element() -> String {
    "releases".to_string()
}

fn default_id_attribute() -> String {
    "id".to_string()
}

fn default_unknown_label() -> String {
    "Unknown".to_string()
}

fn default_progress_interval() -> u64 {
    100_000
}

fn default_true() -> bool {
    true
}
