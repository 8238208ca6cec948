//! Configuration schema as written by users (`make-env.yaml`).
//!
//! Every section is optional and unknown keys are ignored. Values are
//! validated into [`GlobalConfig`](super::GlobalConfig) by
//! [`validate`](super::validate).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use super::model::{Commands, DockerfileSettings, TarCompression};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(deserialize_with = "scalar_map")]
    pub vars: BTreeMap<String, String>,
    pub local_bin_var: Option<String>,
    pub tools: BTreeMap<String, RawTool>,
    pub tool_sets: BTreeMap<String, Vec<String>>,
    pub commands: Commands,
    pub dockerfile: DockerfileSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTool {
    pub provided: Option<RawProvided>,
    pub http: Option<RawFetch>,
    pub s3: Option<RawFetch>,
    pub pipx: Option<RawPipx>,
    pub go: Option<RawGo>,
    pub maven: Option<RawMaven>,
    #[serde(deserialize_with = "scalar_map")]
    pub vars: BTreeMap<String, String>,
    pub depends_on: Vec<String>,
}

impl RawTool {
    /// Keys of every populated installer section, in schema order.
    pub fn populated_installers(&self) -> Vec<&'static str> {
        let sections = [
            ("provided", self.provided.is_some()),
            ("http", self.http.is_some()),
            ("s3", self.s3.is_some()),
            ("pipx", self.pipx.is_some()),
            ("go", self.go.is_some()),
            ("maven", self.maven.is_some()),
        ];
        sections.into_iter().filter(|(_, present)| *present).map(|(key, _)| key).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProvided {
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFetch {
    pub url: Option<String>,
    pub zip: Option<RawZip>,
    pub tar: Option<RawTar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawZip {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTar {
    pub compression: TarCompression,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPipx {
    pub package: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub version: Option<String>,
    pub app: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawGo {
    pub module: Option<String>,
    pub sub_path: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub version: Option<String>,
    #[serde(deserialize_with = "scalar_map")]
    pub env: BTreeMap<String, String>,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMaven {
    pub artifact: Option<String>,
}

/// A YAML/TOML scalar accepted where a string is expected.
///
/// `version: 1.7` is as common in tool manifests as `version: "1.7"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<BTreeMap<String, Scalar>> = Option::deserialize(deserializer)?;
    Ok(map.unwrap_or_default().into_iter().map(|(k, v)| (k, v.into())).collect())
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_tool() {
        let raw: RawConfig =
            serde_yaml::from_str("tools:\n  jq:\n    http:\n      url: https://x/jq\n").unwrap();
        let jq = &raw.tools["jq"];
        assert_eq!(jq.populated_installers(), vec!["http"]);
        assert_eq!(jq.http.as_ref().unwrap().url.as_deref(), Some("https://x/jq"));
    }

    #[test]
    fn numeric_vars_become_strings() {
        let raw: RawConfig = serde_yaml::from_str(
            "vars:\n  retries: 3\n  debug: false\ntools:\n  kind:\n    vars:\n      version: 0.23\n    go:\n      module: sigs.k8s.io/kind\n      version: 1\n",
        )
        .unwrap();
        assert_eq!(raw.vars["retries"], "3");
        assert_eq!(raw.vars["debug"], "false");
        assert_eq!(raw.tools["kind"].vars["version"], "0.23");
        assert_eq!(raw.tools["kind"].go.as_ref().unwrap().version.as_deref(), Some("1"));
    }

    #[test]
    fn camel_case_keys_and_unknown_keys() {
        let raw: RawConfig = serde_yaml::from_str(
            "localBinVar: TOOLS\nunknown: 1\ntoolSets:\n  lint: [jq]\ndockerfile:\n  stagePrefix: tools-\n  installDir: /usr/local/bin\ntools:\n  jq:\n    dependsOn: [yq]\n    provided: {}\n",
        )
        .unwrap();
        assert_eq!(raw.local_bin_var.as_deref(), Some("TOOLS"));
        assert_eq!(raw.tool_sets["lint"], vec!["jq".to_string()]);
        assert_eq!(raw.dockerfile.stage_prefix, "tools-");
        assert_eq!(raw.dockerfile.install_dir, "/usr/local/bin");
        assert_eq!(raw.dockerfile.final_stage, "make-env");
        assert_eq!(raw.tools["jq"].depends_on, vec!["yq".to_string()]);
    }

    #[test]
    fn partial_commands_keep_defaults() {
        let raw: RawConfig = serde_yaml::from_str("commands:\n  curl: wget-curl\n").unwrap();
        assert_eq!(raw.commands.curl, "wget-curl");
        assert_eq!(raw.commands.tar, "tar");
    }

    #[test]
    fn tar_compression_aliases() {
        let raw: RawConfig = serde_yaml::from_str(
            "tools:\n  a:\n    http:\n      url: u\n      tar:\n        compression: gz\n",
        )
        .unwrap();
        let tar = raw.tools["a"].http.as_ref().unwrap().tar.as_ref().unwrap();
        assert_eq!(tar.compression, TarCompression::Gzip);
    }

    #[test]
    fn unknown_compression_is_rejected() {
        let result: Result<RawConfig, _> = serde_yaml::from_str(
            "tools:\n  a:\n    http:\n      url: u\n      tar:\n        compression: lzma\n",
        );
        assert!(result.is_err());
    }
}
