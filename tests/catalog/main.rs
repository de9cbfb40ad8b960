//! Integration tests for Layer 2: Catalog
//!
//! Tests for dataset mapping, batch assembly, and record encoding.

mod batch;
