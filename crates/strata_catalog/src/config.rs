//! Configuration for catalog assembly.

use serde::{Deserialize, Serialize};
use strata_foundation::logging::{self, LogFormat};
use strata_paths::ReconcileConfig;
use strata_schema::MapperConfig;

/// Settings for a catalog batch, deserializable from whatever source the
/// host loads configuration from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Type-descriptor mapping.
    pub mapper: MapperConfig,
    /// Folder reconciliation.
    pub reconcile: ReconcileConfig,
    /// Log output format used by [`CatalogConfig::init_logging`].
    pub log_format: LogFormat,
}

impl CatalogConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type-mapping configuration.
    #[must_use]
    pub fn with_mapper(mut self, mapper: MapperConfig) -> Self {
        self.mapper = mapper;
        self
    }

    /// Sets the reconciliation configuration.
    #[must_use]
    pub fn with_reconcile(mut self, reconcile: ReconcileConfig) -> Self {
        self.reconcile = reconcile;
        self
    }

    /// Sets the log format.
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Installs the global log subscriber in the configured format.
    pub fn init_logging(&self) {
        logging::init_logging(self.log_format);
    }
}
