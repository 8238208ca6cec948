pub mod artifact;
pub mod dependency_graph;
pub mod descriptor;
pub mod error;
pub mod identifiers;
pub mod template;

pub use artifact::ArtifactKind;
pub use dependency_graph::DependencyGraph;
pub use descriptor::{
    Archive, Commands, DescriptorError, DockerfileSettings, FetchSource, GlobalConfig, GoModule,
    Installer, MavenArtifact, PipxPackage, RawConfig, TarCompression, ToolDescriptor, ToolSet,
};
pub use error::AppError;
pub use identifiers::ToolName;
pub use template::{Fragment, TemplateError};
