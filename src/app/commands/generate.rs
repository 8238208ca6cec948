//! Generate command: load the manifest, render every enabled artifact, then
//! write them.

use std::path::PathBuf;

use tracing::debug;

use crate::adapters::{LoadedConfig, load_config};
use crate::app::AppContext;
use crate::domain::{AppError, ArtifactKind};
use crate::ports::{ArtifactSink, ConfigSource, FragmentCatalog};
use crate::services::Emitter;

pub const DEFAULT_CONFIG_PATH: &str = "make-env.yaml";
pub const DEFAULT_MAKEFILE_PATH: &str = "make-env.Makefile";
pub const DEFAULT_DOCKERFILE_PATH: &str = "make-env.Dockerfile";

/// Options for a generate run.
///
/// An empty output path disables that artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub config_path: String,
    pub makefile_path: String,
    pub dockerfile_path: String,
    /// Directory every path is resolved against; the current directory if unset.
    pub directory: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            makefile_path: DEFAULT_MAKEFILE_PATH.to_string(),
            dockerfile_path: DEFAULT_DOCKERFILE_PATH.to_string(),
            directory: None,
        }
    }
}

impl GenerateOptions {
    /// Enabled artifacts with their output paths.
    pub fn outputs(&self) -> Vec<(ArtifactKind, &str)> {
        ArtifactKind::ALL
            .into_iter()
            .map(|kind| match kind {
                ArtifactKind::Makefile => (kind, self.makefile_path.as_str()),
                ArtifactKind::Dockerfile => (kind, self.dockerfile_path.as_str()),
            })
            .filter(|(_, path)| !path.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: String,
    pub bytes: usize,
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub tools: usize,
    pub artifacts: Vec<GeneratedArtifact>,
}

/// Execute the generate command.
///
/// Every artifact is rendered before any is written, so a composition
/// failure leaves existing outputs untouched.
pub fn execute<S, C>(
    ctx: &AppContext<S, C>,
    options: &GenerateOptions,
) -> Result<GenerateReport, AppError>
where
    S: ConfigSource + ArtifactSink,
    C: FragmentCatalog,
{
    let LoadedConfig { config, digest } = load_config(ctx.store(), &options.config_path)?;
    let emitter = Emitter::new(&config, options.config_path.as_str(), digest)?;

    let mut rendered = Vec::new();
    for (kind, path) in options.outputs() {
        let content = emitter.emit(ctx.catalog(), kind, path).map_err(|source| {
            AppError::Generate { artifact: kind, path: path.to_string(), source }
        })?;
        rendered.push((kind, path, content));
    }

    let mut artifacts = Vec::with_capacity(rendered.len());
    for (kind, path, content) in rendered {
        ctx.store().write_artifact(path, &content)?;
        debug!(artifact = %kind, path, bytes = content.len(), "wrote artifact");
        artifacts.push(GeneratedArtifact { kind, path: path.to_string(), bytes: content.len() });
    }

    Ok(GenerateReport { tools: config.tools.len(), artifacts })
}
