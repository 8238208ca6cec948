mod artifact_sink;
mod config_source;
mod fragment_catalog;

pub use artifact_sink::ArtifactSink;
pub use config_source::ConfigSource;
pub use fragment_catalog::FragmentCatalog;
