/// Descriptor validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error(
        "Invalid tool name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidToolName(String),

    #[error("Invalid variable name '{key}' in {scope}: must be alphanumeric with hyphens, underscores, or periods")]
    InvalidVarKey { scope: String, key: String },

    #[error("Invalid localBinVar '{0}': must start with a letter or '_' and contain only letters, digits, or '_'")]
    InvalidLocalBinVar(String),

    #[error(
        "Tool '{tool}' must declare exactly one installer (provided, http, s3, pipx, go, maven); found {found}"
    )]
    InstallerCount { tool: String, found: String },

    #[error("Tool '{tool}' declares both zip and tar extraction")]
    ConflictingArchive { tool: String },

    #[error("Tool '{tool}' is missing required field '{field}'")]
    MissingField { tool: String, field: &'static str },

    #[error("Tool '{tool}' depends on undefined tool '{dependency}'")]
    UnknownDependency { tool: String, dependency: String },

    #[error("Tool '{tool}' lists dependency '{dependency}' more than once")]
    DuplicateDependency { tool: String, dependency: String },

    #[error("Tool set '{set}' references undefined tool '{tool}'")]
    UnknownToolSetMember { set: String, tool: String },

    #[error("Tool set '{0}' has the same name as a tool")]
    ToolSetShadowsTool(String),

    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),

    #[error("Identifier '{identifier}' is derived from both {first} and {second}")]
    IdentifierCollision { identifier: String, first: String, second: String },

    #[error("{origin} derives an empty identifier: a name needs at least one letter or digit")]
    EmptyIdentifier { origin: String },
}
