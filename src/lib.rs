//! make-env: compile a tool manifest into a Makefile and a multi-stage
//! Dockerfile that install the same tools.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{EmbeddedFragmentCatalog, FilesystemStore};
use app::{AppContext, commands::generate};

pub use app::commands::generate::{GenerateOptions, GenerateReport, GeneratedArtifact};
pub use domain::{AppError, ArtifactKind};

/// Generate the enabled artifacts on the local filesystem.
///
/// Paths in `options` resolve against `options.directory`, or the current
/// directory when unset.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, AppError> {
    let store = match &options.directory {
        Some(directory) => FilesystemStore::in_directory(directory)?,
        None => FilesystemStore::current()?,
    };
    let ctx = AppContext::new(store, EmbeddedFragmentCatalog::new());
    generate::execute(&ctx, options)
}
