//! Timestamped backups written next to the file being modified, under
//! `<parent>/tutil-log/<stem>-<YYYY-MM-DD_HH-MM-SS><.ext>`.
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub const BACKUP_DIR: &str = "tutil-log";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Backs `path` up using the current local time.
pub fn backup(path: &Path) -> Result<PathBuf> {
    backup_at(path, Local::now().naive_local())
}

/// Backs `path` up under the name derived from `timestamp`.
///
/// Fails with `Error::BackupExists` if that name is already taken; the existing
/// backup is left as it is. The source file is only read.
pub fn backup_at(path: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
    let destination = backup_path(path, timestamp)?;
    if let Some(dir) = destination.parent() {
        fs::create_dir_all(dir)?;
    }

    let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&destination)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::BackupExists { path: destination });
        }
        Err(e) => return Err(e.into()),
    };
    let written = file
        .write_all(content.as_bytes())
        .and_then(|()| file.sync_all());
    discard_on_error(&destination, written)?;

    info!("Backup of {} saved as {}", path.display(), destination.display());
    Ok(destination)
}

/// Removes a partially written backup so it is never mistaken for a good copy.
fn discard_on_error(destination: &Path, written: std::io::Result<()>) -> Result<()> {
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(destination) {
            warn!("Could not remove incomplete backup {}: {}", destination.display(), rm);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Where the backup of `path` taken at `timestamp` lives.
pub fn backup_path(path: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let parent = absolute.parent().unwrap_or_else(|| Path::new("/"));
    let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
    debug!("Timestamp used for the backup file: {}", stamp);

    let stem = absolute
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match absolute.extension() {
        Some(ext) => format!("{}-{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}-{}", stem, stamp),
    };

    Ok(parent.join(BACKUP_DIR).join(name))
}
