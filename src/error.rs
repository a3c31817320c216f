use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while opening a backup archive or reading its metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Backup archive `{}` does not exist", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while reading backup archive")]
    Io(#[from] io::Error),

    #[error("Invalid backup archive: {0}")]
    Format(#[source] io::Error),

    #[error("Backup archive has no `{}` entry", crate::archive::METADATA_FILE)]
    MissingMetadata,

    #[error("Cannot parse backup metadata")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Sort an I/O error raised while walking decompressed archive content.
    ///
    /// flate2 and tar report corruption with these kinds; anything else is a
    /// genuine transport failure.
    pub(crate) fn from_archive_io(err: io::Error) -> Self {
        match err.kind() {
            // tar reports bad headers and short skips as `Other`.
            io::ErrorKind::Other => Error::Format(err),
            _ => Error::from_header_io(err),
        }
    }

    /// Sort an I/O error raised while reading the gzip header.
    pub(crate) fn from_header_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof => Error::Format(err),
            _ => Error::Io(err),
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(io::Error::new(io::ErrorKind::InvalidData, msg.into()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}
