//! Error types for qrcgen
//!
//! Failure modes of a generation run:
//! - Root directory problems (missing, not a directory, unreadable entries)
//! - Output problems (cannot write or move the manifest into place)
//! - Alias collisions when strict alias checking is requested
//! - Logging setup

use std::fmt;
use std::io;

/// Result type alias for qrcgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrcgen
#[derive(Debug)]
pub enum Error {
    /// Root directory errors
    Path(PathError),
    /// Output file errors
    Io(IoError),
    /// Alias assignment errors
    Alias(AliasError),
    /// Tracing subscriber could not be installed
    Logging(String),
}

/// Root directory errors
#[derive(Debug)]
pub enum PathError {
    /// Root directory does not exist
    NotFound(String),
    /// Root path exists but is not a directory
    NotADirectory(String),
    /// Walking the tree failed partway through
    TraversalFailed { path: String, source: io::Error },
    /// A file or directory name is not valid UTF-8 and cannot be written to the manifest
    NonUtf8Name(String),
}

/// Output file errors
#[derive(Debug)]
pub enum IoError {
    /// Failed to create or write the temporary output file
    FileWriteFailed { path: String, source: io::Error },
    /// Failed to move the temporary file onto the output path
    RenameFailed { path: String, source: io::Error },
}

/// Alias assignment errors
#[derive(Debug)]
pub enum AliasError {
    /// Two or more files resolved to the same alias
    Collision { alias: String, paths: Vec<String> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Path(e) => write!(f, "Path error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Alias(e) => write!(f, "Alias error: {}", e),
            Error::Logging(details) => write!(f, "Logging error: {}", details),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound(path) => write!(f, "Directory not found: {}", path),
            PathError::NotADirectory(path) => write!(f, "Not a directory: {}", path),
            PathError::TraversalFailed { path, source } => {
                write!(f, "Failed to traverse {}: {}", path, source)
            }
            PathError::NonUtf8Name(path) => {
                write!(f, "File name is not valid UTF-8: {}", path)
            }
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::FileWriteFailed { path, source } => {
                write!(f, "Failed to write {}: {}", path, source)
            }
            IoError::RenameFailed { path, source } => {
                write!(f, "Failed to move output into place at {}: {}", path, source)
            }
        }
    }
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::Collision { alias, paths } => write!(
                f,
                "Alias '{}' is shared by {} files: {}",
                alias,
                paths.len(),
                paths.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Path(PathError::TraversalFailed { source, .. })
            | Error::Io(IoError::FileWriteFailed { source, .. })
            | Error::Io(IoError::RenameFailed { source, .. }) => Some(source),
            _ => None,
        }
    }
}

impl std::error::Error for PathError {}
impl std::error::Error for IoError {}
impl std::error::Error for AliasError {}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"));
        Error::Path(PathError::TraversalFailed { path, source })
    }
}

impl Error {
    /// True for failures caused by the scanned tree rather than the output
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Path(_) | Error::Alias(_))
    }
}
