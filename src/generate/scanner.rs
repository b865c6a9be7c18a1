//! File discovery under the resource root.
//!
//! Walks the tree once and returns the relative slash path of every file.
//! Each directory lists its own files before descending into any of its
//! subdirectories.

use crate::error::{Error, PathError, Result};
use crate::paths::relative_slash_path;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Collect relative paths of all files under `root`.
///
/// Directories are descended but links to directories are not followed.
/// A link that points at a file is listed like any other file. With
/// `sort` set, siblings are visited in file name order. Otherwise a
/// directory's files come first, then its subdirectories, each group in
/// the order the filesystem returns them.
pub fn scan_files(root: &Path, sort: bool) -> Result<Vec<String>> {
    let walker = WalkDir::new(root).follow_links(false).min_depth(1);
    let walker = if sort {
        walker.sort_by_file_name()
    } else {
        // Stable sort: only moves directories after files.
        walker.sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
    };

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry?;

        let is_file = if entry.path_is_symlink() {
            entry.path().is_file()
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            if !entry.file_type().is_dir() {
                debug!("Skipping non-file entry {}", entry.path().display());
            }
            continue;
        }

        let Some(rel_path) = relative_slash_path(root, entry.path())? else {
            continue;
        };

        debug!("Found {}", rel_path);
        files.push(rel_path);
    }

    Ok(files)
}

/// Fail unless `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    let display = root.display().to_string();
    match root.metadata() {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::Path(PathError::NotADirectory(display))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::Path(PathError::NotFound(display)))
        }
        Err(source) => Err(Error::Path(PathError::TraversalFailed {
            path: display,
            source,
        })),
    }
}
