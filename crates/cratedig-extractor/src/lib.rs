//! Cratedig Extractor
//!
//! Pulls the releases of a personal collection out of a catalog export that
//! is far too large to load as a tree.
//!
//! # Overview
//!
//! The collection side file is loaded into an [`AnnotationIndex`] first. The
//! export is then walked once, token by token: every record directly under
//! the root container is either skipped without allocating anything or, when
//! its identifier is in the index, rebuilt into a release and expanded into
//! one entry per owned copy.
//!
//! # Architecture
//!
//! ```text
//! side file → AnnotationIndex ─────────────┐
//!                                          ▼
//! export → TokenCursor → walker → release parser → expander → assembler → Collection
//! ```
//!
//! # Stream position
//!
//! Every parser is written in terms of [`walker::consume_element`] and
//! [`walker::skip_element`], so a record that is skipped and a record that is
//! parsed leave the cursor on the same token.
//!
//! # Example Usage
//!
//! ```
//! use cratedig_extractor::{AnnotationIndex, Extractor, ExtractorConfig, TokenCursor};
//!
//! let csv = "header\n,,,,,,,42,Vinyl,,,,\"[signed]\"\n";
//! let index = AnnotationIndex::parse(csv, Default::default());
//!
//! let xml = r#"<releases>
//!     <release id="41"><title>Skipped</title></release>
//!     <release id="42"><title>Wanted</title></release>
//! </releases>"#;
//!
//! let extractor = Extractor::new(&index, ExtractorConfig::default());
//! let extraction = extractor.run(&mut TokenCursor::from_xml(xml))?;
//!
//! assert_eq!(extraction.collection.len(), 1);
//! assert_eq!(extraction.collection.releases[0].note.as_deref(), Some("signed"));
//! # Ok::<(), cratedig_extractor::ExtractError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod annotations;
mod credits;
mod dates;
mod release;
mod expander;
mod assembler;
mod extractor;
pub mod cursor;
pub mod walker;


pub use error::ExtractError;
pub use config::{AnnotationColumns, ExtractorConfig};
pub use types::{Extraction, ExtractionSummary};
pub use annotations::AnnotationIndex;
pub use credits::{join_credits, ArtistCredit};
pub use dates::release_year;
pub use release::{parse_release, LabelCredit};
pub use expander::expand;
pub use assembler::CollectionAssembler;
pub use extractor::Extractor;
pub use cursor::{TokenCursor, TokenKind};
