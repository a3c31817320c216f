use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Open a path-backed archive for one read pass.
pub(crate) fn open_local(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => Error::Io(source),
    })
}
