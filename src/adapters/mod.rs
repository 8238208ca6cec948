pub mod config_loader;
pub mod filesystem;
pub mod fragment_catalog;

pub use config_loader::{ConfigFormat, LoadedConfig, load_config};
pub use filesystem::FilesystemStore;
pub use fragment_catalog::EmbeddedFragmentCatalog;
