//! In-memory port doubles for unit tests.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ArtifactKind, Fragment, TemplateError};
use crate::ports::{ArtifactSink, ConfigSource, FragmentCatalog};

/// In-memory file map implementing both filesystem ports.
///
/// Writes to paths registered with [`MemoryStore::fail_writes_to`] fail with
/// a permission error.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    files: Arc<Mutex<BTreeMap<String, String>>>,
    read_only: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn fail_writes_to(&self, path: &str) {
        self.read_only.lock().unwrap().push(path.to_string());
    }
}

impl ConfigSource for MemoryStore {
    fn read_config(&self, path: &str) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| AppError::ConfigRead {
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }
}

impl ArtifactSink for MemoryStore {
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.read_only.lock().unwrap().iter().any(|p| p == path) {
            return Err(AppError::OutputWrite {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.add(path, content);
        Ok(())
    }
}

/// Catalog serving fixed fragments, the same set for every artifact kind.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    fragments: Vec<Fragment>,
}

impl StaticCatalog {
    pub fn new(fragments: &[(&str, &str)]) -> Self {
        let fragments =
            fragments.iter().map(|(name, source)| Fragment::new(*name, *source)).collect();
        Self { fragments }
    }
}

impl FragmentCatalog for StaticCatalog {
    fn fragments(&self, _kind: ArtifactKind) -> Result<Vec<Fragment>, TemplateError> {
        Ok(self.fragments.clone())
    }
}
