//! Errors, identifier escaping, canonical types, and logging for Strata.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`IdentifierScheme`] - Escape/unescape of identifier segments
//! - [`CatalogType`] - The closed set of canonical catalog types
//! - [`ResourcePath`] - Resource identifiers for storage objects
//! - [`logging`] - Subscriber initialisation for hosts and tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod escape;
pub mod logging;
mod resource;
mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result, UnknownTypeWarning};
pub use escape::{IdentifierScheme, escape, unescape};
pub use resource::{ResourcePath, S3_URL_SCHEME, parse_s3_url, split_bucket_key};
pub use types::CatalogType;
