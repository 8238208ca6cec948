//! Filesystem adapter implementations for the config and artifact ports.
//!
//! Both ports are implemented on a single `FilesystemStore` that owns the
//! directory relative paths are resolved against.

mod artifact_sink;
mod config_source;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;

/// Filesystem-backed store rooted at a working directory.
///
/// Relative paths resolve against the root; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Create a store rooted at `directory`, itself relative to the current
    /// working directory unless absolute.
    pub fn in_directory(directory: &Path) -> Result<Self, AppError> {
        let root = std::env::current_dir()?.join(directory);
        if !root.is_dir() {
            return Err(AppError::DirectoryNotFound(directory.to_path_buf()));
        }
        let root = root.canonicalize()?;
        debug!(directory = %root.display(), "changed working directory");
        Ok(Self::new(root))
    }

    /// The directory relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path against the root.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
