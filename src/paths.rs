//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: normalization works on path
//! components only, so symbolic links are never resolved.

use crate::error::{Error, PathError, Result};
use std::path::{Component, Path, PathBuf};

/// Collapse redundant separators, `.` segments and `..` segments that
/// follow a normal segment.
///
/// Leading `..` segments of a relative path are kept, and `..` directly
/// under the root is dropped. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Path of `path` relative to `root`, with `/` as the only separator.
///
/// Returns `Ok(None)` when `path` is not under `root`. Names that are not
/// valid UTF-8 are an error, since a lossy conversion would point the
/// manifest at a file that does not exist.
pub fn relative_slash_path(root: &Path, path: &Path) -> Result<Option<String>> {
    let Ok(relative) = path.strip_prefix(root) else {
        return Ok(None);
    };
    let parts = relative
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| Error::Path(PathError::NonUtf8Name(path.display().to_string())))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(parts.join("/").replace('\\', "/")))
}

/// Final component of a relative slash path.
pub fn base_name(relative: &str) -> &str {
    relative.rsplit('/').next().unwrap_or(relative)
}
