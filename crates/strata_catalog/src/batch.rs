//! Batches of catalog records.
//!
//! A batch gathers the datasets and folder trees discovered in one pass.
//! Each dataset and each folder tree is a separate unit of work: a unit that
//! fails is recorded as a [`UnitFailure`] and its siblings still land in the
//! batch.

use strata_foundation::{Error, ErrorContext, ErrorKind, Result, UnknownTypeWarning};
use strata_paths::{EntityRegistry, Reconciler};

use crate::config::CatalogConfig;
use crate::dataset::{DatasetMapper, DatasetRecord};
use crate::record::CatalogRecord;

/// A unit of work that could not be mapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitFailure {
    /// The dataset location or folder root that failed.
    pub unit: String,
    /// Why it failed.
    pub error: Error,
}

/// Datasets and folders collected for publishing.
#[derive(Clone, Debug)]
pub struct CatalogBatch {
    mapper: DatasetMapper,
    reconciler: Reconciler,
    datasets: Vec<DatasetRecord>,
    folders: EntityRegistry,
    warnings: Vec<UnknownTypeWarning>,
    failures: Vec<UnitFailure>,
}

impl Default for CatalogBatch {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl CatalogBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            mapper: DatasetMapper::new(config.mapper.clone()),
            reconciler: Reconciler::new(config.reconcile.clone()),
            datasets: Vec::new(),
            folders: EntityRegistry::new(),
            warnings: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Maps a dataset into the batch. Returns false if it failed, in which
    /// case the failure is recorded instead.
    pub fn add_dataset<N, D>(
        &mut self,
        location: &str,
        columns: &[(N, D)],
        rows: Option<u64>,
    ) -> bool
    where
        N: AsRef<str>,
        D: AsRef<str>,
    {
        match self.mapper.map(location, columns, rows) {
            Ok(mapped) => {
                self.datasets.push(mapped.record);
                self.warnings.extend(mapped.warnings);
                true
            }
            Err(error) => {
                self.fail(location, error);
                false
            }
        }
    }

    /// Reconciles the folder tree below `root` into the batch. Folders shared
    /// with earlier trees are merged. Returns false if reconciliation failed,
    /// in which case the failure is recorded and no folder of this tree is
    /// added.
    pub fn add_folder_tree<F, L>(
        &mut self,
        root: &str,
        known_folders: &[F],
        leaves: &[L],
    ) -> bool
    where
        F: AsRef<str>,
        L: AsRef<str>,
    {
        match self
            .reconciler
            .reconcile_into(&self.folders, root, known_folders, leaves)
        {
            Ok(folders) => {
                self.folders = folders;
                true
            }
            Err(error) => {
                self.fail(root, error);
                false
            }
        }
    }

    fn fail(&mut self, unit: &str, error: Error) {
        let error = if error.context.is_some() {
            error
        } else {
            error.with_context(ErrorContext::new().with_unit(unit))
        };
        tracing::warn!(unit, %error, "catalog unit failed");
        self.failures.push(UnitFailure {
            unit: unit.to_string(),
            error,
        });
    }

    /// Returns the mapped datasets, in insertion order.
    #[must_use]
    pub fn datasets(&self) -> &[DatasetRecord] {
        &self.datasets
    }

    /// Returns the folder registry.
    #[must_use]
    pub fn folders(&self) -> &EntityRegistry {
        &self.folders
    }

    /// Returns the unknown-type warnings raised so far.
    #[must_use]
    pub fn warnings(&self) -> &[UnknownTypeWarning] {
        &self.warnings
    }

    /// Returns the units that failed.
    #[must_use]
    pub fn failures(&self) -> &[UnitFailure] {
        &self.failures
    }

    /// Returns true if nothing has been added successfully.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty() && self.folders.is_empty()
    }

    /// Flattens the batch: datasets in insertion order, then folders in
    /// resource id order.
    #[must_use]
    pub fn records(&self) -> Vec<CatalogRecord> {
        let mut records: Vec<CatalogRecord> = self
            .datasets
            .iter()
            .cloned()
            .map(CatalogRecord::from)
            .collect();
        records.extend(self.folders.iter().cloned().map(CatalogRecord::from));
        records
    }

    /// Encodes the flattened records as `MessagePack`.
    ///
    /// Uses named serialization to preserve struct field names.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        encode_records(&self.records())
    }
}

/// Encodes records as `MessagePack` with named fields.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn encode_records(records: &[CatalogRecord]) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(records).map_err(|e| Error::new(ErrorKind::Encode(e.to_string())))
}

/// Decodes records produced by [`encode_records`].
///
/// # Errors
/// Returns an error if the bytes are not a valid record list.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<CatalogRecord>> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Encode(e.to_string())))
}
