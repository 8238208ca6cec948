//! `ArtifactSink` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::ArtifactSink;

use super::FilesystemStore;

impl ArtifactSink for FilesystemStore {
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        let write_error = |source| AppError::OutputWrite { path: path.to_string(), source };
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&full_path, content).map_err(write_error)
    }
}
