use crate::ports::{ArtifactSink, ConfigSource, FragmentCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigSource + ArtifactSink, C: FragmentCatalog> {
    store: S,
    catalog: C,
}

impl<S: ConfigSource + ArtifactSink, C: FragmentCatalog> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, catalog: C) -> Self {
        Self { store, catalog }
    }

    /// Get a reference to the config and artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the fragment catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
