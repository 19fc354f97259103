//! Cratedig CLI library.
//!
//! This library provides the pieces behind the `cratedig` binary: argument
//! parsing, configuration loading, the extract command, and writing the
//! collection document.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;

pub use cli::Cli;
pub use config::{Config, Paths};
pub use error::{CliError, Result};
pub use extract::execute_extract;
pub use output::Destination;
