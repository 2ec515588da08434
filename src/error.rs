//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors and provides semantic variants for backup
//! collisions, undecodable input and operator aborts.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup file already exists: {}", path.display())]
    BackupExists { path: PathBuf },

    #[error("{} is not valid UTF-8 text", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("Aborted by operator, no files were modified")]
    Aborted,

    #[error("Could not replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Maps a read error on `path` to `NotUtf8` when the bytes failed to decode.
    pub fn from_read(path: &std::path::Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::InvalidData {
            Error::NotUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    }
}
