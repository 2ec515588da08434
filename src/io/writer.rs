//! Line-oriented reading and atomic rewriting of UTF-8 text files.
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Reads `path` as UTF-8 and splits it into lines without terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Replaces the contents of `path` with `lines`, each followed by `\n`.
///
/// The lines go to a temporary file in the same directory which is then renamed
/// over `path`, so readers never observe a half-written file. The original
/// permissions are kept. Symlinks are followed: the file they point to is
/// rewritten and the link stays in place.
pub fn overwrite_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let path = fs::canonicalize(path)?;
    let path = path.as_path();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        for line in lines {
            out.write_all(line.as_ref().as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
    }
    tmp.as_file().set_permissions(permissions)?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
