//! The flattened records handed to a publisher.

use serde::{Deserialize, Serialize};
use strata_paths::FolderEntity;

use crate::dataset::DatasetRecord;

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogRecord {
    /// A file dataset with its fields.
    Dataset(DatasetRecord),
    /// A folder grouping files and subfolders.
    Folder(FolderEntity),
}

impl CatalogRecord {
    /// Returns the identifier of the record.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        match self {
            Self::Dataset(dataset) => &dataset.resource_id,
            Self::Folder(folder) => &folder.resource_id,
        }
    }
}

impl From<DatasetRecord> for CatalogRecord {
    fn from(dataset: DatasetRecord) -> Self {
        Self::Dataset(dataset)
    }
}

impl From<FolderEntity> for CatalogRecord {
    fn from(folder: FolderEntity) -> Self {
        Self::Folder(folder)
    }
}
