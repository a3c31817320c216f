use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::io::{ArchiveReader, Compressed, drain, open_local};
use crate::metadata::Metadata;

use super::extractor::{extract_metadata, list_entries};
use super::layout::EntrySummary;

/// Where an [`ArchiveFile`] gets its compressed bytes from.
#[derive(Debug)]
enum Backing {
    /// Reopened on every [`ArchiveFile::open`]; no handle is held in between.
    Path(PathBuf),
    /// Compressed bytes drained from a stream at construction.
    Buffer(Arc<[u8]>),
}

/// Read access to one backup archive.
///
/// Every [`open`](Self::open) yields an independent decompressed stream.
/// [`metadata`](Self::metadata) scans the archive once and keeps the result;
/// failed scans are not remembered and are retried on the next call.
#[derive(Debug)]
pub struct ArchiveFile {
    backing: Backing,
    metadata: OnceLock<Metadata>,
}

impl ArchiveFile {
    /// Refer to an archive on disk. The filesystem is not touched until
    /// [`open`](Self::open) or [`metadata`](Self::metadata).
    ///
    /// A caller that already knows the archive's metadata can supply it; the
    /// archive is then never scanned for it.
    pub fn from_path(path: impl Into<PathBuf>, metadata: Option<Metadata>) -> Self {
        Self {
            backing: Backing::Path(path.into()),
            metadata: metadata.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Read a compressed archive stream into memory. The reader is consumed
    /// to its end and not kept.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data = drain(reader)?;
        tracing::debug!(bytes = data.len(), "buffered backup archive");

        Ok(Self {
            backing: Backing::Buffer(data),
            metadata: OnceLock::new(),
        })
    }

    /// Path of a path-backed archive, `None` for one read from a stream.
    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::Path(path) => Some(path),
            Backing::Buffer(_) => None,
        }
    }

    /// Start a new pass over the decompressed archive content.
    pub fn open(&self) -> Result<ArchiveReader> {
        let source = match &self.backing {
            Backing::Path(path) => {
                tracing::debug!(path = %path.display(), "opening backup archive");
                Compressed::File(open_local(path)?)
            }
            Backing::Buffer(data) => {
                tracing::debug!(bytes = data.len(), "opening buffered backup archive");
                Compressed::Memory(Cursor::new(Arc::clone(data)))
            }
        };

        ArchiveReader::new(source)
    }

    /// The archive's metadata record, extracted on first use.
    pub fn metadata(&self) -> Result<&Metadata> {
        if let Some(meta) = self.metadata.get() {
            tracing::trace!("backup metadata cache hit");
            return Ok(meta);
        }

        let meta = extract_metadata(self.open()?)?;
        tracing::debug!(id = %meta.id, "extracted backup metadata");

        // A concurrent caller may have won the race; both values are valid
        // extractions and everyone gets the stored one.
        Ok(self.metadata.get_or_init(|| meta))
    }

    /// List every entry of the archive in order.
    pub fn entries(&self) -> Result<Vec<EntrySummary>> {
        list_entries(self.open()?)
    }
}
