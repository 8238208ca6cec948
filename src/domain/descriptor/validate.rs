//! Raw schema -> validated [`GlobalConfig`].

use std::collections::BTreeMap;

use super::error::DescriptorError;
use super::model::{
    Archive, DEFAULT_LOCAL_BIN_VAR, FetchSource, GlobalConfig, GoModule, Installer,
    MavenArtifact, PipxPackage, ToolDescriptor, ToolSet,
};
use super::raw::{RawConfig, RawFetch, RawTool};
use crate::domain::ToolName;
use crate::domain::dependency_graph::DependencyGraph;
use crate::domain::identifiers::naming::{
    archive_identifier_of, identifier_of, scoped_identifier_of, stage_identifier_of,
    stamp_identifier_of, url_identifier_of,
};
use crate::domain::identifiers::validation::{validate_name, validate_variable_identifier};

/// Validate a raw configuration.
///
/// Checks run in a fixed order and the first failure is returned: names and
/// installers per tool, references, cycles, then identifier uniqueness.
pub fn validate(raw: RawConfig) -> Result<GlobalConfig, DescriptorError> {
    let local_bin_var = raw.local_bin_var.unwrap_or_else(|| DEFAULT_LOCAL_BIN_VAR.to_string());
    if !validate_variable_identifier(&local_bin_var) {
        return Err(DescriptorError::InvalidLocalBinVar(local_bin_var));
    }

    validate_var_keys("global vars", &raw.vars)?;

    let mut tools = BTreeMap::new();
    for (name, raw_tool) in raw.tools {
        let tool = build_tool(&name, raw_tool)?;
        tools.insert(tool.name.clone(), tool);
    }

    check_dependencies(&tools)?;

    let mut tool_sets = BTreeMap::new();
    for (name, members) in raw.tool_sets {
        let set = build_tool_set(&name, members, &tools)?;
        tool_sets.insert(set.name.clone(), set);
    }

    let config = GlobalConfig {
        vars: raw.vars,
        local_bin_var,
        tools,
        tool_sets,
        commands: raw.commands,
        dockerfile: raw.dockerfile,
    };

    DependencyGraph::from_config(&config).check_acyclic()?;
    check_identifiers_not_empty(&config)?;
    check_identifier_collisions(&config)?;

    Ok(config)
}

fn validate_var_keys(
    scope: &str,
    vars: &BTreeMap<String, String>,
) -> Result<(), DescriptorError> {
    match vars.keys().find(|key| !validate_name(key, true)) {
        Some(key) => {
            Err(DescriptorError::InvalidVarKey { scope: scope.to_string(), key: key.clone() })
        }
        None => Ok(()),
    }
}

fn build_tool(name: &str, raw: RawTool) -> Result<ToolDescriptor, DescriptorError> {
    let tool_name = ToolName::new(name)?;
    validate_var_keys(&format!("tool '{}'", name), &raw.vars)?;

    let populated = raw.populated_installers();
    if populated.len() != 1 {
        let found = if populated.is_empty() { "none".to_string() } else { populated.join(", ") };
        return Err(DescriptorError::InstallerCount { tool: name.to_string(), found });
    }

    let installer = if let Some(provided) = raw.provided {
        Installer::Provided { default: provided.default.unwrap_or_else(|| name.to_string()) }
    } else if let Some(http) = raw.http {
        Installer::Http(build_fetch(name, http, "http.url")?)
    } else if let Some(s3) = raw.s3 {
        Installer::ObjectStore(build_fetch(name, s3, "s3.url")?)
    } else if let Some(pipx) = raw.pipx {
        Installer::PythonApp(PipxPackage {
            package: pipx.package.unwrap_or_else(|| name.to_string()),
            version: pipx.version.filter(|v| !v.is_empty()),
            app: pipx.app.unwrap_or_else(|| name.to_string()),
        })
    } else if let Some(go) = raw.go {
        let module = required(name, go.module, "go.module")?;
        let version = required(name, go.version, "go.version")?;
        let sub_path = go.sub_path.filter(|s| !s.is_empty());
        let mut module = GoModule {
            module,
            sub_path,
            version,
            env: go.env,
            flags: go.flags,
            binary: String::new(),
        };
        module.binary = GoModule::binary_name_of(&module.package());
        Installer::LanguageModule(module)
    } else if let Some(maven) = raw.maven {
        Installer::PackageManager(MavenArtifact {
            artifact: required(name, maven.artifact, "maven.artifact")?,
        })
    } else {
        return Err(DescriptorError::InstallerCount {
            tool: name.to_string(),
            found: "none".to_string(),
        });
    };

    let mut depends_on = Vec::with_capacity(raw.depends_on.len());
    for dep in raw.depends_on {
        let dep = ToolName::new(&dep).map_err(|_| DescriptorError::UnknownDependency {
            tool: name.to_string(),
            dependency: dep.clone(),
        })?;
        if depends_on.contains(&dep) {
            return Err(DescriptorError::DuplicateDependency {
                tool: name.to_string(),
                dependency: dep.to_string(),
            });
        }
        depends_on.push(dep);
    }

    Ok(ToolDescriptor { name: tool_name, installer, vars: raw.vars, depends_on })
}

fn build_fetch(
    tool: &str,
    raw: RawFetch,
    url_field: &'static str,
) -> Result<FetchSource, DescriptorError> {
    let url = required(tool, raw.url, url_field)?;
    let archive = match (raw.zip, raw.tar) {
        (Some(_), Some(_)) => {
            return Err(DescriptorError::ConflictingArchive { tool: tool.to_string() });
        }
        (Some(zip), None) => Some(Archive::Zip { path: non_empty_or(zip.path, tool) }),
        (None, Some(tar)) => {
            Some(Archive::Tar { compression: tar.compression, path: non_empty_or(tar.path, tool) })
        }
        (None, None) => None,
    };
    Ok(FetchSource { url, archive })
}

fn required(
    tool: &str,
    value: Option<String>,
    field: &'static str,
) -> Result<String, DescriptorError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DescriptorError::MissingField { tool: tool.to_string(), field })
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| fallback.to_string())
}

fn check_dependencies(tools: &BTreeMap<ToolName, ToolDescriptor>) -> Result<(), DescriptorError> {
    for tool in tools.values() {
        if let Some(missing) = tool.depends_on.iter().find(|dep| !tools.contains_key(*dep)) {
            return Err(DescriptorError::UnknownDependency {
                tool: tool.name.to_string(),
                dependency: missing.to_string(),
            });
        }
    }
    Ok(())
}

fn build_tool_set(
    name: &str,
    members: Vec<String>,
    tools: &BTreeMap<ToolName, ToolDescriptor>,
) -> Result<ToolSet, DescriptorError> {
    let set_name = ToolName::new(name)?;
    if tools.contains_key(&set_name) {
        return Err(DescriptorError::ToolSetShadowsTool(name.to_string()));
    }

    let mut resolved = Vec::with_capacity(members.len());
    for member in members {
        match tools.get_key_value(member.as_str()) {
            Some((tool_name, _)) => {
                if !resolved.contains(tool_name) {
                    resolved.push(tool_name.clone());
                }
            }
            None => {
                return Err(DescriptorError::UnknownToolSetMember {
                    set: name.to_string(),
                    tool: member,
                });
            }
        }
    }

    Ok(ToolSet { name: set_name, tools: resolved })
}

/// Names made only of separators (`-`, `_`, `.`) derive no identifier at all.
fn check_identifiers_not_empty(config: &GlobalConfig) -> Result<(), DescriptorError> {
    let global_keys =
        config.vars.keys().map(|key| (key.as_str(), format!("global var '{}'", key)));
    let tools = config.tools.values().flat_map(|tool| {
        let var_keys = tool.vars.keys().map(move |key| {
            (key.as_str(), format!("var '{}' of tool '{}'", key, tool.name))
        });
        std::iter::once((tool.name.as_str(), format!("tool '{}'", tool.name))).chain(var_keys)
    });
    let sets =
        config.tool_sets.keys().map(|name| (name.as_str(), format!("tool set '{}'", name)));

    match global_keys.chain(tools).chain(sets).find(|(name, _)| identifier_of(name).is_empty()) {
        Some((_, origin)) => Err(DescriptorError::EmptyIdentifier { origin }),
        None => Ok(()),
    }
}

/// Every identifier either artifact defines must come from exactly one source.
fn check_identifier_collisions(config: &GlobalConfig) -> Result<(), DescriptorError> {
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();
    let mut claim = |identifier: String, source: String| -> Result<(), DescriptorError> {
        match claimed.get(&identifier) {
            Some(first) => Err(DescriptorError::IdentifierCollision {
                identifier,
                first: first.clone(),
                second: source,
            }),
            None => {
                claimed.insert(identifier, source);
                Ok(())
            }
        }
    };

    claim(config.local_bin_var.clone(), "localBinVar".to_string())?;
    for key in config.vars.keys() {
        claim(identifier_of(key), format!("global var '{}'", key))?;
    }

    for (name, tool) in &config.tools {
        claim(identifier_of(name), format!("tool '{}'", name))?;
        claim(stamp_identifier_of(name), format!("stamp of tool '{}'", name))?;
        if tool.installer.has_url() {
            claim(url_identifier_of(name), format!("URL of tool '{}'", name))?;
        }
        if tool.installer.has_archive() {
            claim(archive_identifier_of(name), format!("archive of tool '{}'", name))?;
        }
        for key in tool.vars.keys() {
            claim(scoped_identifier_of(name, key), format!("var '{}' of tool '{}'", key, name))?;
        }
    }

    // Dockerfile stages share one namespace across tools and tool sets.
    let mut stages: BTreeMap<String, &str> = BTreeMap::new();
    let set_stages =
        config.tool_sets.keys().map(|n| (format!("set-{}", stage_identifier_of(n)), n));
    for (stage, name) in config.tools.keys().map(|n| (stage_identifier_of(n), n)).chain(set_stages)
    {
        if let Some(first) = stages.insert(stage.clone(), name.as_str()) {
            return Err(DescriptorError::IdentifierCollision {
                identifier: stage,
                first: format!("'{}'", first),
                second: format!("'{}'", name),
            });
        }
    }

    Ok(())
}
