//! Tool descriptors: the user-facing schema and the validated model.

mod error;
mod model;
mod raw;
mod validate;

pub use error::DescriptorError;
pub use model::{
    Archive, Commands, DEFAULT_LOCAL_BIN_VAR, DockerfileSettings, FetchSource, GlobalConfig,
    GoModule, Installer, MavenArtifact, PipxPackage, TarCompression, ToolDescriptor, ToolSet,
};
pub use raw::RawConfig;
pub use validate::validate;
