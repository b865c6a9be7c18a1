//! Output file writer.

use crate::error::{Error, IoError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `contents` to `path`, replacing whatever is there.
///
/// The text goes to a sibling temp file first and is then renamed over
/// `path`, so readers never see a half-written manifest. The parent
/// directory must already exist. If `path` is a symlink, its target is
/// replaced and the link is left in place.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let target = resolve_link(path);
    let path = target.as_path();
    let temp_path = temp_path_for(path);
    debug!("Writing {} bytes to {}", contents.len(), temp_path.display());

    fs::write(&temp_path, contents).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        Error::Io(IoError::FileWriteFailed {
            path: path.display().to_string(),
            source,
        })
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        Error::Io(IoError::RenameFailed {
            path: path.display().to_string(),
            source,
        })
    })
}

/// Follow `path` to its final target when it is a symlink.
///
/// A dangling link resolves to where it points, so the write creates
/// the target file.
fn resolve_link(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.to_path_buf();
    }

    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    match fs::read_link(path) {
        Ok(link) => match path.parent() {
            Some(parent) => parent.join(link),
            None => link,
        },
        Err(_) => path.to_path_buf(),
    }
}

/// `out.qrc` -> `.out.qrc.tmp` in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("qresource")));
    name.push(".tmp");
    path.with_file_name(name)
}
