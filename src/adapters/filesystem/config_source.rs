//! `ConfigSource` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::ConfigSource;

use super::FilesystemStore;

impl ConfigSource for FilesystemStore {
    fn read_config(&self, path: &str) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path))
            .map_err(|source| AppError::ConfigRead { path: path.to_string(), source })
    }
}
