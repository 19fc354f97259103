//! Command-line argument parsing.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Cratedig - Extract your collection from a catalog release export.
#[derive(Debug, Parser)]
#[command(name = "cratedig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CRATEDIG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Collection side file (CSV export of the collection)
    #[arg(long)]
    pub collection: Option<PathBuf>,

    /// Catalog release export (XML)
    #[arg(long)]
    pub releases: Option<PathBuf>,

    /// Output document path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the document to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
