use crate::domain::AppError;

/// Port for writing generated artifacts.
///
/// Implementations replace any existing content at `path`.
pub trait ArtifactSink {
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), AppError>;
}
