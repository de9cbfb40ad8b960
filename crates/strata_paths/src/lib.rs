//! Path parsing, folder reconciliation, and entity registry for Strata.
//!
//! This crate provides:
//! - [`RootScope`] and [`PathRecord`] - Identifiers positioned under a scan root
//! - [`Reconciler`] - Folder tree reconstruction from flat identifier lists
//! - [`EntityRegistry`] - Persistent folder registry merged across scans
//! - [`verify_tree`] - Coverage and nesting checks over reconciled trees
//!
//! ```
//! use strata_paths::reconcile;
//!
//! let folders = reconcile("a/", &[] as &[&str], &["a/x.csv", "a/b/y.csv"]).unwrap();
//! assert_eq!(folders[0].path, "a/");
//! assert_eq!(folders[0].direct_children, ["a/x.csv", "a/b/"]);
//! assert_eq!(folders[1].direct_children, ["a/b/y.csv"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod folder;
mod path;
mod reconcile;
mod registry;
mod verify;

pub use config::ReconcileConfig;
pub use folder::FolderEntity;
pub use path::{PathRecord, RootScope};
pub use reconcile::{Reconciler, reconcile};
pub use registry::EntityRegistry;
pub use verify::verify_tree;
