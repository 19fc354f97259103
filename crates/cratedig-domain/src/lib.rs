//! Cratedig Domain Layer
//!
//! This crate contains the data model shared by the extractor and the CLI.
//! It defines what a catalog release looks like once it has been pulled out of
//! the export stream, what a collection annotation is, and the shape of the
//! final collection document.
//!
//! ## Key Concepts
//!
//! - **Release**: One catalog entry rebuilt from the export (title, genres, artist, tracks, label)
//! - **Annotation**: Side-file metadata for one physical copy (folder, copy note)
//! - **ReleaseEntry**: A release merged with one annotation; one per owned copy
//! - **Collection**: The ordered list of entries handed to the writer
//!
//! ## Serialization
//!
//! Every optional field is omitted from the output when empty. Only `id` is
//! always present on an entry.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod collection;
pub mod release;

// Re-exports for convenience
pub use annotation::Annotation;
pub use collection::{Collection, ReleaseEntry};
pub use release::{Release, ReleaseId, Track};
