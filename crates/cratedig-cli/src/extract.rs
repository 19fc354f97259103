//! The extract command: side file + export → collection document.

use crate::config::Config;
use crate::error::Result;
use crate::output::{write_collection, Destination};
use cratedig_extractor::{AnnotationIndex, ExtractionSummary, Extractor, TokenCursor};
use tracing::{info, warn};

/// Run one extraction and write the document.
///
/// Both inputs are opened before anything is parsed, and nothing is written
/// unless extraction succeeds.
pub fn execute_extract(
    config: &Config,
    destination: &Destination,
    compact: bool,
) -> Result<ExtractionSummary> {
    config.validate()?;

    let index = AnnotationIndex::from_path(&config.paths.collection, config.extractor.columns)?;
    if index.skipped_rows() > 0 {
        warn!(
            "{} collection rows had no usable release id",
            index.skipped_rows()
        );
    }

    let mut cursor = TokenCursor::from_path(&config.paths.releases)?;
    info!("Reading releases from {}", config.paths.releases.display());

    let extractor = Extractor::new(&index, config.extractor.clone());
    let extraction = extractor.run(&mut cursor)?;

    write_collection(&extraction.collection, destination, compact)?;
    if let Destination::File(path) = destination {
        info!(
            "Wrote {} entries to {}",
            extraction.collection.len(),
            path.display()
        );
    }

    Ok(extraction.summary)
}
