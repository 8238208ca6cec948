use crate::domain::{ArtifactKind, Fragment, TemplateError};

/// Source of the fragments an artifact kind is rendered from.
pub trait FragmentCatalog {
    /// Fragments for `kind`, in registration order.
    ///
    /// Shared fragments come first so that kind-specific ones with the same
    /// name replace them.
    fn fragments(&self, kind: ArtifactKind) -> Result<Vec<Fragment>, TemplateError>;
}
