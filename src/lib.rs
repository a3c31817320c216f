//! # backup-archive
//!
//! Read access to the gzip-compressed backup archives written by a cluster
//! controller's backup process.
//!
//! An [`ArchiveFile`] wraps either a path on disk or a stream read fully into
//! memory, and offers the same two operations for both:
//!
//! - [`ArchiveFile::open`] returns a fresh decompressed stream on every call
//! - [`ArchiveFile::metadata`] returns the embedded metadata record, scanning
//!   the archive the first time and answering from memory afterwards
//!
//! Archives can also be fetched over HTTP(S) with [`HttpFetcher`].
//!
//! ## Example
//!
//! ```no_run
//! use std::io::Read;
//! use backup_archive::ArchiveFile;
//!
//! fn main() -> backup_archive::Result<()> {
//!     let archive = ArchiveFile::from_path("juju-backup.tgz", None);
//!
//!     let meta = archive.metadata()?;
//!     println!("{} from {} ({})", meta.id, meta.hostname, meta.version);
//!
//!     let mut content = Vec::new();
//!     archive.open()?.read_to_end(&mut content)?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod io;
pub mod metadata;

pub use archive::{ArchiveFile, EntryKind, EntrySummary};
pub use cli::Cli;
pub use error::{Error, Result};
pub use io::{ArchiveReader, HttpFetcher};
pub use metadata::Metadata;
