use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{ArtifactKind, DescriptorError, TemplateError};

/// Library-wide error type for make-env operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Working directory override does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Config source missing or unreadable.
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Config source is not valid YAML/TOML for the schema.
    #[error("Failed to parse config '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// Descriptor validation failed.
    #[error("Invalid config: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Rendering an artifact failed.
    #[error("Failed to generate {artifact} '{path}': {source}")]
    Generate {
        artifact: ArtifactKind,
        path: String,
        #[source]
        source: TemplateError,
    },

    /// Artifact destination not writable.
    #[error("Failed to write '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that only need the class of failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigRead { source, .. } | AppError::OutputWrite { source, .. } => {
                source.kind()
            }
            AppError::DirectoryNotFound(_) => io::ErrorKind::NotFound,
            AppError::ConfigParse { .. } | AppError::Descriptor(_) => io::ErrorKind::InvalidInput,
            AppError::Generate { .. } => io::ErrorKind::InvalidData,
        }
    }
}
