//! Tool manifest loading: read, decode, validate.

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::descriptor::validate;
use crate::domain::{AppError, GlobalConfig, RawConfig};
use crate::ports::ConfigSource;

/// Serialization format of a manifest, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// A validated manifest and the digest of its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: GlobalConfig,
    /// Hex SHA-256 of the raw source.
    pub digest: String,
}

/// Read the manifest at `path` from `source` and validate it.
pub fn load_config<S>(source: &S, path: &str) -> Result<LoadedConfig, AppError>
where
    S: ConfigSource + ?Sized,
{
    let content = source.read_config(path)?;
    let raw = decode(&content, ConfigFormat::from_path(path))
        .map_err(|details| AppError::ConfigParse { path: path.to_string(), details })?;
    let config = validate(raw)?;

    debug!(
        path,
        tools = config.tools.len(),
        tool_sets = config.tool_sets.len(),
        "parsed config"
    );

    Ok(LoadedConfig { config, digest: compute_digest(&content) })
}

/// Decode manifest text; an empty or null YAML document is an empty manifest.
pub fn decode(content: &str, format: ConfigFormat) -> Result<RawConfig, String> {
    match format {
        ConfigFormat::Yaml if is_blank_yaml(content) => Ok(RawConfig::default()),
        ConfigFormat::Yaml => serde_yaml::from_str::<Option<RawConfig>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

fn is_blank_yaml(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

fn compute_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
