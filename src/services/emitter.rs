//! Artifact emission: resolve tool order, build the render context, and render
//! an artifact kind's entry fragment.

use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::{
    ArtifactKind, DependencyGraph, DescriptorError, GlobalConfig, Installer, TemplateError,
    ToolDescriptor, ToolName,
};
use crate::ports::FragmentCatalog;
use crate::services::TemplateEngine;

/// Per-tool data handed to fragments, alongside the raw descriptor fields.
#[derive(Debug, Clone, Serialize)]
pub struct ToolView<'a> {
    pub name: &'a str,
    pub installer: &'a Installer,
    pub vars: &'a BTreeMap<String, String>,
    pub depends_on: &'a [ToolName],
    pub provided: bool,
    /// Fragment that renders the install recipe.
    pub fragment: &'static str,
    /// Go package path, without version.
    pub package: Option<String>,
    /// Declared tool that executes this tool's installer, if any.
    pub runner: Option<&'static str>,
    /// Tools whose stamps this tool's stamp depends on.
    pub prerequisites: Vec<&'a str>,
    pub has_url: bool,
    pub has_archive: bool,
    /// Short digest of the installer settings, part of the stamp name.
    pub installer_digest: String,
}

impl<'a> ToolView<'a> {
    fn of(config: &'a GlobalConfig, tool: &'a ToolDescriptor) -> Self {
        let runner = runner_of(&tool.installer)
            .filter(|runner| *runner != tool.name.as_str() && config.tools.contains_key(*runner));

        let mut prerequisites: Vec<&str> = tool.depends_on.iter().map(|d| d.as_str()).collect();
        if let Some(runner) = runner
            && !prerequisites.contains(&runner)
        {
            prerequisites.push(runner);
        }

        let package = match &tool.installer {
            Installer::LanguageModule(module) => Some(module.package()),
            _ => None,
        };

        Self {
            name: tool.name.as_str(),
            installer: &tool.installer,
            vars: &tool.vars,
            depends_on: &tool.depends_on,
            provided: tool.is_provided(),
            fragment: tool.installer.fragment_name(),
            package,
            runner,
            prerequisites,
            has_url: tool.installer.has_url(),
            has_archive: tool.installer.has_archive(),
            installer_digest: installer_digest(&tool.installer),
        }
    }
}

/// Tool name whose binary runs an installer, when one is declared.
fn runner_of(installer: &Installer) -> Option<&'static str> {
    match installer {
        Installer::LanguageModule(_) => Some("go"),
        Installer::PythonApp(_) => Some("pipx"),
        Installer::PackageManager(_) => Some("mvn"),
        _ => None,
    }
}

/// Length of the hex installer digest embedded in stamp file names.
const STAMP_DIGEST_LEN: usize = 12;

/// Hex SHA-256 prefix of the serialized installer.
///
/// Any change to an installer field (version, URL, archive path, ...) yields
/// a new stamp file, so make reinstalls the tool.
pub fn installer_digest(installer: &Installer) -> String {
    let serialized = serde_json::to_vec(installer).unwrap_or_default();
    let digest = Sha256::digest(&serialized);
    digest.iter().take(STAMP_DIGEST_LEN / 2).map(|byte| format!("{:02x}", byte)).collect()
}

#[derive(Serialize)]
struct RenderContext<'a> {
    version: &'static str,
    in_path: &'a str,
    out_path: &'a str,
    config_digest: &'a str,
    config: &'a GlobalConfig,
    tools: &'a [ToolView<'a>],
}

/// Renders artifacts for one validated configuration.
#[derive(Debug)]
pub struct Emitter<'a> {
    config: &'a GlobalConfig,
    tools: Vec<ToolView<'a>>,
    in_path: String,
    config_digest: String,
}

impl<'a> Emitter<'a> {
    /// Resolve the emission order of `config`.
    ///
    /// `in_path` and `config_digest` only appear in generated headers.
    pub fn new(
        config: &'a GlobalConfig,
        in_path: impl Into<String>,
        config_digest: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let order = DependencyGraph::from_config(config).emission_order()?;
        debug!(order = ?order, "resolved emission order");

        let tools = order
            .into_iter()
            .filter_map(|name| config.tool(name))
            .map(|tool| ToolView::of(config, tool))
            .collect();

        Ok(Self { config, tools, in_path: in_path.into(), config_digest: config_digest.into() })
    }

    /// Tool names, dependencies first.
    pub fn emission_order(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    /// Render the `kind` artifact that will be written to `out_path`.
    pub fn emit<C>(
        &self,
        catalog: &C,
        kind: ArtifactKind,
        out_path: &str,
    ) -> Result<String, TemplateError>
    where
        C: FragmentCatalog + ?Sized,
    {
        let engine = TemplateEngine::new(kind.reference(), catalog.fragments(kind)?)?;
        let ctx = RenderContext {
            version: env!("CARGO_PKG_VERSION"),
            in_path: &self.in_path,
            out_path,
            config_digest: &self.config_digest,
            config: self.config,
            tools: &self.tools,
        };

        debug!(artifact = %kind, out_path, "rendering artifact");
        engine.render(kind.entry_fragment(), &ctx)
    }
}
