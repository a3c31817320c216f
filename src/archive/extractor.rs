use std::io::Read;

use crate::error::{Error, Result};
use crate::metadata::Metadata;

use super::layout::{EntryKind, EntrySummary, is_metadata_path};

/// Largest up-front allocation for the metadata entry; the rest grows on demand.
const MAX_PREALLOC: u64 = 64 * 1024;

/// Scan decompressed archive content for the metadata entry and parse it.
///
/// Entries are read in order and everything in front of the metadata entry is
/// discarded; scanning stops as soon as it has been read.
pub fn extract_metadata<R: Read>(reader: R) -> Result<Metadata> {
    let mut archive = tar::Archive::new(reader);
    let entries = archive.entries().map_err(Error::from_archive_io)?;

    for entry in entries {
        let mut entry = entry.map_err(Error::from_archive_io)?;

        let found =
            is_metadata_path(&entry.path_bytes()) && entry.header().entry_type().is_file();
        if !found {
            tracing::trace!(
                path = %String::from_utf8_lossy(&entry.path_bytes()),
                size = entry.size(),
                "skipping entry"
            );
            continue;
        }

        let expected = entry.size();
        let mut data = Vec::with_capacity(expected.min(MAX_PREALLOC) as usize);
        entry
            .read_to_end(&mut data)
            .map_err(Error::from_archive_io)?;
        if data.len() as u64 != expected {
            return Err(Error::format(format!(
                "metadata entry truncated: expected {} bytes, got {}",
                expected,
                data.len()
            )));
        }

        return Metadata::from_slice(&data);
    }

    Err(Error::MissingMetadata)
}

/// Walk every entry of decompressed archive content without reading file data.
pub(crate) fn list_entries<R: Read>(reader: R) -> Result<Vec<EntrySummary>> {
    let mut archive = tar::Archive::new(reader);
    let entries = archive.entries().map_err(Error::from_archive_io)?;

    let mut summaries = Vec::new();
    for entry in entries {
        let entry = entry.map_err(Error::from_archive_io)?;
        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let kind = EntryKind::classify(&path, entry.header().entry_type().is_dir());
        summaries.push(EntrySummary {
            path,
            size: entry.size(),
            kind,
        });
    }

    Ok(summaries)
}
