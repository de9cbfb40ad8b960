//! Strata - Catalog materialization for files in object storage
//!
//! This crate re-exports all layers of the Strata system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: strata_catalog    - Dataset records, batches, wire encoding
//! Layer 1: strata_schema     - Type-descriptor lexer, parser, field materializer
//!          strata_paths      - Folder reconciliation over flat identifiers
//! Layer 0: strata_foundation - Errors, identifier escaping, canonical types, logging
//! ```

pub use strata_catalog as catalog;
pub use strata_foundation as foundation;
pub use strata_paths as paths;
pub use strata_schema as schema;
