//! Validated, immutable descriptor model.
//!
//! Everything here serializes with snake_case keys; the serialized form is
//! the data context that fragments see.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ToolName;

/// Default name of the directory variable tools are installed into.
pub const DEFAULT_LOCAL_BIN_VAR: &str = "LOCALBIN";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalConfig {
    pub vars: BTreeMap<String, String>,
    pub local_bin_var: String,
    pub tools: BTreeMap<ToolName, ToolDescriptor>,
    pub tool_sets: BTreeMap<ToolName, ToolSet>,
    pub commands: Commands,
    pub dockerfile: DockerfileSettings,
}

impl GlobalConfig {
    pub fn tool(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }
}

/// One installable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub installer: Installer,
    pub vars: BTreeMap<String, String>,
    pub depends_on: Vec<ToolName>,
}

impl ToolDescriptor {
    pub fn is_provided(&self) -> bool {
        matches!(self.installer, Installer::Provided { .. })
    }
}

/// The single installation method of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Installer {
    /// Expected to already be on the machine; `default` is the command to use.
    #[serde(rename = "provided")]
    Provided { default: String },
    #[serde(rename = "http")]
    Http(FetchSource),
    #[serde(rename = "s3")]
    ObjectStore(FetchSource),
    #[serde(rename = "pipx")]
    PythonApp(PipxPackage),
    #[serde(rename = "go")]
    LanguageModule(GoModule),
    #[serde(rename = "maven")]
    PackageManager(MavenArtifact),
}

impl Installer {
    /// Name of the fragment that renders this variant's install recipe.
    pub fn fragment_name(&self) -> &'static str {
        match self {
            Installer::Provided { .. } => "install/provided",
            Installer::Http(_) => "install/http",
            Installer::ObjectStore(_) => "install/s3",
            Installer::PythonApp(_) => "install/pipx",
            Installer::LanguageModule(_) => "install/go",
            Installer::PackageManager(_) => "install/maven",
        }
    }

    /// Whether a `<TOOL>_URL` variable is emitted for this variant.
    pub fn has_url(&self) -> bool {
        matches!(self, Installer::Http(_) | Installer::ObjectStore(_))
    }

    /// Whether a `<TOOL>_ZIP` variable is emitted for this variant.
    pub fn has_archive(&self) -> bool {
        match self {
            Installer::Http(source) | Installer::ObjectStore(source) => source.archive.is_some(),
            _ => false,
        }
    }
}

/// A single file fetched by URL, optionally packed in an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchSource {
    /// Inline template; see the `tpl` helper.
    pub url: String,
    pub archive: Option<Archive>,
}

/// How to pull the binary out of a downloaded archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Archive {
    Zip { path: String },
    Tar { compression: TarCompression, path: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TarCompression {
    #[default]
    #[serde(alias = "")]
    None,
    #[serde(alias = "gz")]
    Gzip,
    #[serde(alias = "bz2")]
    Bzip2,
    Xz,
    Zstd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipxPackage {
    pub package: String,
    pub version: Option<String>,
    /// Name of the application binary pipx links.
    pub app: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoModule {
    pub module: String,
    pub sub_path: Option<String>,
    pub version: String,
    pub env: BTreeMap<String, String>,
    pub flags: Vec<String>,
    /// Name of the binary `go install` produces.
    pub binary: String,
}

impl GoModule {
    /// Package path passed to `go install`, without the version.
    pub fn package(&self) -> String {
        match &self.sub_path {
            Some(sub) if !sub.is_empty() => {
                format!("{}/{}", self.module.trim_end_matches('/'), sub.trim_start_matches('/'))
            }
            _ => self.module.clone(),
        }
    }

    /// Binary name `go install` derives from a package path.
    ///
    /// The last path element, skipping a trailing major version suffix such
    /// as `/v2`.
    pub fn binary_name_of(package: &str) -> String {
        let mut segments = package.trim_end_matches('/').rsplit('/');
        let last = segments.next().unwrap_or_default();
        let is_major_suffix = last.len() > 1
            && last.starts_with('v')
            && last[1..].chars().all(|c| c.is_ascii_digit());
        if is_major_suffix && let Some(previous) = segments.next() {
            return previous.to_string();
        }
        last.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MavenArtifact {
    /// `group:artifact:version` coordinate.
    pub artifact: String,
}

/// Named, ordered group of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSet {
    pub name: ToolName,
    pub tools: Vec<ToolName>,
}

/// Executable names used in emitted recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commands {
    pub go: String,
    pub curl: String,
    pub aws: String,
    pub tar: String,
    pub unzip: String,
    pub mkdir: String,
    pub chmod: String,
    pub rm: String,
    pub ln: String,
    pub touch: String,
    pub mv: String,
    pub pipx: String,
    pub mvn: String,
    pub java: String,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            go: "go".into(),
            curl: "curl".into(),
            aws: "aws".into(),
            tar: "tar".into(),
            unzip: "unzip".into(),
            mkdir: "mkdir".into(),
            chmod: "chmod".into(),
            rm: "rm".into(),
            ln: "ln".into(),
            touch: "touch".into(),
            mv: "mv".into(),
            pipx: "pipx".into(),
            mvn: "mvn".into(),
            java: "java".into(),
        }
    }
}

/// Settings that only affect the generated Dockerfile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "camelCase"))]
pub struct DockerfileSettings {
    pub fetch_image: String,
    pub go_image: String,
    pub python_image: String,
    pub maven_image: String,
    pub s3_image: String,
    pub stage_prefix: String,
    pub final_stage: String,
    pub final_image: String,
    pub pre_copy: Option<String>,
    pub post_copy: Option<String>,
    pub install_dir: String,
}

impl Default for DockerfileSettings {
    fn default() -> Self {
        Self {
            fetch_image: "docker.io/library/buildpack-deps:bookworm".into(),
            go_image: "docker.io/library/golang:1.22-bookworm".into(),
            python_image: "docker.io/library/python:3.12-bookworm".into(),
            maven_image: "docker.io/library/maven:3-eclipse-temurin-21".into(),
            s3_image: "docker.io/amazon/aws-cli:latest".into(),
            stage_prefix: "make-env-".into(),
            final_stage: "make-env".into(),
            final_image: "docker.io/library/debian:bookworm-slim".into(),
            pre_copy: None,
            post_copy: None,
            install_dir: "/opt/make-env/bin".into(),
        }
    }
}
