use std::io;
use std::path::Path;
use thiserror::Error;

/// Reasons a directory could not be listed at all.
///
/// Per-entry metadata failures are not errors; they degrade the affected
/// field of that entry instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("I/O error reading {path}: {kind}")]
    Io { path: String, kind: io::ErrorKind },
}

impl ScanError {
    pub(crate) fn from_io(err: &io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::PathNotFound { path },
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied { path },
            io::ErrorKind::NotADirectory => ScanError::NotADirectory { path },
            kind => ScanError::Io { path, kind },
        }
    }

    pub(crate) fn from_walk(err: &walkdir::Error, path: &Path) -> Self {
        match err.io_error() {
            Some(io_err) => Self::from_io(io_err, path),
            // Loop errors only; not reachable at depth 1 without following links.
            None => ScanError::Io {
                path: path.display().to_string(),
                kind: io::ErrorKind::Other,
            },
        }
    }
}
