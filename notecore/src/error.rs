//! Error types for file and settings operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can go wrong while loading or saving a document.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a UTF-8 text file", .path.display())]
    Decode { path: PathBuf },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Classify an I/O error raised while stat'ing or reading `path`.
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::InvalidData => Self::Decode { path: path.to_path_buf() },
            _ => Self::Read { path: path.to_path_buf(), source },
        }
    }

    pub fn from_write(path: &Path, source: io::Error) -> Self {
        Self::Write { path: path.to_path_buf(), source }
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path,
            Self::Read { path, .. } | Self::Decode { path } | Self::Write { path, .. } => path,
        }
    }
}

/// Settings file problems. Never fatal: callers fall back to defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FileError>;
