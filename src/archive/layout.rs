//! Names and entry classes of the backup archive's internal tree.

/// Root-level entry holding the JSON metadata record.
pub const METADATA_FILE: &str = "metadata.json";

/// Root-level directory holding the database dump.
pub const DUMP_DIR: &str = "dump";

/// What a tar entry is, from the point of view of a backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The embedded metadata record.
    Metadata,
    /// A file under the `dump/` subtree.
    Dump,
    /// Any other file; opaque backup payload.
    Payload,
    Directory,
}

impl EntryKind {
    pub fn classify(path: &str, is_dir: bool) -> Self {
        let path = normalize(path);
        if is_dir || path.is_empty() {
            EntryKind::Directory
        } else if path == METADATA_FILE {
            EntryKind::Metadata
        } else if path
            .strip_prefix(DUMP_DIR)
            .is_some_and(|rest| rest.starts_with('/'))
        {
            EntryKind::Dump
        } else {
            EntryKind::Payload
        }
    }
}

/// One entry of an archive, as listed by [`ArchiveFile::entries`](super::ArchiveFile::entries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub path: String,
    pub size: u64,
    pub kind: EntryKind,
}

/// Drop the `./` prefixes some tar producers put on every name.
pub(crate) fn normalize(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}

pub(crate) fn is_metadata_path(path: &[u8]) -> bool {
    std::str::from_utf8(path).is_ok_and(|path| normalize(path) == METADATA_FILE)
}
