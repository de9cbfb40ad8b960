//! Configuration for folder reconciliation.

use strata_foundation::IdentifierScheme;

/// Settings for the path reconciler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReconcileConfig {
    /// Delimiter and escape characters of identifiers.
    pub scheme: IdentifierScheme,
    /// Prepended to a folder path to form its resource id.
    pub folder_id_prefix: String,
    /// Also create every folder between a leaf's parent and the root.
    pub synthesize_ancestors: bool,
    /// Check coverage and nesting of the result before returning it.
    pub verify: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            scheme: IdentifierScheme::default(),
            folder_id_prefix: String::new(),
            synthesize_ancestors: false,
            verify: cfg!(debug_assertions),
        }
    }
}

impl ReconcileConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: IdentifierScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the folder resource id prefix.
    #[must_use]
    pub fn with_folder_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.folder_id_prefix = prefix.into();
        self
    }

    /// Sets whether intermediate folders are synthesized.
    #[must_use]
    pub fn with_synthesize_ancestors(mut self, synthesize: bool) -> Self {
        self.synthesize_ancestors = synthesize;
        self
    }

    /// Sets whether results are verified.
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
