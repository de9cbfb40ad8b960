//! Integration tests for Layer 1: Paths
//!
//! Tests for folder reconciliation and the folder registry.

mod properties;
mod registry;
