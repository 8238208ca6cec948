use crate::domain::AppError;

/// Port for reading the tool manifest.
pub trait ConfigSource {
    /// Read the whole source at `path` as UTF-8 text.
    fn read_config(&self, path: &str) -> Result<String, AppError>;
}
