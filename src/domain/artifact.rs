//! The two generation targets and their reference syntax.

use std::fmt;

use crate::domain::identifiers::naming::{make_arg_ref, make_var_ref};

/// One of the generated build artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    Makefile,
    Dockerfile,
}

impl ArtifactKind {
    /// Every kind, in generation order.
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Makefile, ArtifactKind::Dockerfile];

    /// Renders a reference to a variable identifier in this artifact.
    pub fn reference(self) -> fn(&str) -> String {
        match self {
            ArtifactKind::Makefile => make_var_ref,
            ArtifactKind::Dockerfile => make_arg_ref,
        }
    }

    /// Directory of this kind's fragments inside the template assets.
    pub fn fragment_dir(self) -> &'static str {
        match self {
            ArtifactKind::Makefile => "makefile",
            ArtifactKind::Dockerfile => "dockerfile",
        }
    }

    /// Name of the top-level fragment.
    pub fn entry_fragment(self) -> &'static str {
        "main"
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Makefile => write!(f, "Makefile"),
            ArtifactKind::Dockerfile => write!(f, "Dockerfile"),
        }
    }
}
