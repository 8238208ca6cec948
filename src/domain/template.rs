//! Fragment sources and composition errors.

/// A named, independently renderable unit of template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Registry name, e.g. `install/http`.
    pub name: String,
    pub source: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }
}

/// Template composition failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to register fragment '{name}': {details}")]
    Register { name: String, details: String },

    #[error("Fragment '{0}' is not registered")]
    NotFound(String),

    #[error("Failed to render fragment '{name}': {details}")]
    Render { name: String, details: String },
}
