//! Configuration for the type-tree mapper.

use strata_foundation::IdentifierScheme;

/// Settings for parsing descriptors and materializing fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapperConfig {
    /// Deepest nesting a descriptor may have; `None` for unbounded.
    pub max_depth: Option<usize>,
    /// Emit a `warn` event for every unknown primitive type.
    pub report_unknown_types: bool,
    /// Scheme used to escape field names inside resource ids.
    pub scheme: IdentifierScheme,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            report_unknown_types: true,
            scheme: IdentifierScheme::default(),
        }
    }
}

impl MapperConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits descriptor nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets whether unknown types are logged.
    #[must_use]
    pub fn with_report_unknown_types(mut self, report: bool) -> Self {
        self.report_unknown_types = report;
        self
    }

    /// Sets the identifier scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: IdentifierScheme) -> Self {
        self.scheme = scheme;
        self
    }
}
