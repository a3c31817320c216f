//! Backup archive access.
//!
//! A backup archive is a gzip-compressed tar stream with this layout:
//!
//! ```text
//! metadata.json     JSON metadata record describing the backup
//! dump/...          database dump
//! ...               any other root-level files, opaque payload
//! ```
//!
//! ## Architecture
//!
//! - [`file`]: [`ArchiveFile`], the accessor over a path or an in-memory buffer
//! - [`extractor`]: sequential tar scan for the metadata entry
//! - [`layout`]: well-known names and entry classification
//!
//! Nothing here seeks. Every read pass starts from a fresh decompressor, so a
//! path-backed archive holds no file handle between calls.

mod extractor;
mod file;
mod layout;

pub use extractor::extract_metadata;
pub use file::ArchiveFile;
pub use layout::{DUMP_DIR, EntryKind, EntrySummary, METADATA_FILE};
