//! Writing the collection document.

use crate::error::{CliError, Result};
use cratedig_domain::Collection;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where the document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A file, replaced if it exists
    File(PathBuf),
    /// Standard output
    Stdout,
}

/// Serialize the collection as JSON, with a trailing newline.
pub fn render(collection: &Collection, compact: bool) -> Result<String> {
    let mut json = if compact {
        serde_json::to_string(collection)?
    } else {
        serde_json::to_string_pretty(collection)?
    };
    json.push('\n');
    Ok(json)
}

/// Serialize and write the collection.
///
/// The document is fully rendered before the destination is touched.
pub fn write_collection(collection: &Collection, destination: &Destination, compact: bool) -> Result<()> {
    let json = render(collection, compact)?;

    match destination {
        Destination::File(path) => fs::write(path, json).map_err(|source| CliError::Output {
            path: path.clone(),
            source,
        }),
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
