//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, identifier escaping, canonical types, and resource ids.

mod errors;
mod escaping;
mod resources;
