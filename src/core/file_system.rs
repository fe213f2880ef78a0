//! Output paths and atomic file writes

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use super::error::SinkError;

pub const DOCX_EXTENSION: &str = "docx";

const FILE_NAME_PREFIX: &str = "Experience_Certificate_";

/// Characters that are replaced in suggested file names
const HOSTILE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// File name suggested in the save dialog for a contractor
pub fn suggested_file_name(contractor_name: &str) -> String {
    let base: String = contractor_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || HOSTILE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{FILE_NAME_PREFIX}{base}.{DOCX_EXTENSION}")
}

/// Append `.docx` when the chosen path has no extension
pub fn with_docx_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DOCX_EXTENSION)
    }
}

/// Write a file all-or-nothing: the content goes to a temporary file in the
/// target's directory, which is renamed over `path` once `write` succeeds.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<PathBuf, SinkError>
where
    F: FnOnce(&mut fs::File) -> Result<(), SinkError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |source: std::io::Error| SinkError::Io {
        path: path.to_path_buf(),
        source,
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    // Created through the umask like any other new file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(&dir).map_err(io_err)?;
    // An overwritten file keeps its mode
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    write(tmp.as_file_mut())?;
    tmp.as_file_mut().flush().map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    // Dropping `tmp` on any earlier return removes the partial file
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}
