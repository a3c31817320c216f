//! Compressed byte sources and the decompressed stream handed to callers.

pub mod http;
mod local;
mod memory;

pub use http::HttpFetcher;
pub(crate) use local::open_local;
pub(crate) use memory::drain;

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};

/// Where the compressed bytes of one `open()` call come from.
#[derive(Debug)]
pub(crate) enum Compressed {
    File(File),
    Memory(Cursor<Arc<[u8]>>),
}

impl Read for Compressed {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Compressed::File(file) => file.read(buf),
            Compressed::Memory(cursor) => cursor.read(buf),
        }
    }
}

/// A fresh, independent stream of decompressed archive content.
///
/// Dropping the reader releases the decompressor and, for path-backed
/// archives, the underlying file handle, whether or not it was read to the end.
#[derive(Debug)]
pub struct ArchiveReader {
    inner: GzDecoder<Compressed>,
}

impl ArchiveReader {
    /// Wrap a compressed source, rejecting it up front if it has no valid gzip header.
    pub(crate) fn new(source: Compressed) -> Result<Self> {
        let mut inner = GzDecoder::new(source);
        // The header is parsed eagerly on blocking sources, so a missing
        // header means parsing failed; the next read hands back that error.
        if inner.header().is_none() {
            return Err(match inner.read(&mut [0u8; 1]) {
                Err(err) => Error::from_header_io(err),
                Ok(_) => Error::format("not a gzip stream"),
            });
        }
        Ok(Self { inner })
    }
}

impl Read for ArchiveReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}
