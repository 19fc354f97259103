//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use cratedig_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations
    #[serde(default)]
    pub paths: Paths,

    /// Extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths {
    /// Collection side file
    #[serde(default = "default_collection")]
    pub collection: PathBuf,

    /// Catalog release export
    #[serde(default = "default_releases")]
    pub releases: PathBuf,

    /// Output document
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            releases: default_releases(),
            output: default_output(),
        }
    }
}

fn default_collection() -> PathBuf {
    PathBuf::from("collection.csv")
}

fn default_releases() -> PathBuf {
    PathBuf::from("releases.xml")
}

fn default_output() -> PathBuf {
    PathBuf::from("collection.json")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Build the effective configuration: file (if any), then flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Let command-line paths take precedence over file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(collection) = &cli.collection {
            self.paths.collection = collection.clone();
        }
        if let Some(releases) = &cli.releases {
            self.paths.releases = releases.clone();
        }
        if let Some(output) = &cli.output {
            self.paths.output = output.clone();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)
    }
}
