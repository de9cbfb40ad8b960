//! Dataset records, batch assembly, and wire encoding for Strata.
//!
//! This crate provides:
//! - [`DatasetMapper`] - Maps a file location and its columns to a [`DatasetRecord`]
//! - [`CatalogBatch`] - Collects datasets and folder trees, isolating failures
//! - [`CatalogRecord`] - The flattened records handed to a publisher
//! - [`CatalogConfig`] - Settings for every stage, including logging
//!
//! # Example
//!
//! ```
//! use strata_catalog::{CatalogBatch, CatalogRecord};
//!
//! let mut batch = CatalogBatch::default();
//! batch.add_dataset("s3://bucket/a/x.csv", &[("id", "int64")], Some(2));
//! batch.add_folder_tree("a/", &[] as &[&str], &["a/x.csv"]);
//!
//! let records = batch.records();
//! assert_eq!(records.len(), 2);
//! assert!(matches!(records[0], CatalogRecord::Dataset(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod batch;
mod config;
mod dataset;
mod record;

pub use batch::{CatalogBatch, UnitFailure, decode_records, encode_records};
pub use config::CatalogConfig;
pub use dataset::{DatasetFormat, DatasetMapper, DatasetRecord, MappedDataset};
pub use record::CatalogRecord;
