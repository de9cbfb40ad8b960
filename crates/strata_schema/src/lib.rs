//! Type-descriptor lexer, parser, type arena, and field materializer for Strata.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of type descriptors
//! - [`Parser`] - Parsing tokens into an arena-allocated [`TypeTree`]
//! - [`Materializer`] - Flattening a tree into pre-ordered [`FieldRecord`]s
//!
//! ```
//! use strata_schema::{materialize, parse_type};
//!
//! let tree = parse_type("map<string,int64>").unwrap();
//! let fields = materialize(&tree, "base");
//! assert_eq!(fields[1].resource_id, "base/map/keys/string");
//! assert!(fields[2].is_value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod lexer;
mod materialize;
mod parser;
mod token;
mod tree;

pub use config::MapperConfig;
pub use lexer::Lexer;
pub use materialize::{
    FieldRecord, Materialized, Materializer, map_column, materialize, materialize_column,
};
pub use parser::{Parser, parse_type};
pub use token::{Bracket, Parameters, Span, Token, TokenKind};
pub use tree::{ChildRole, Member, NodeId, TypeKind, TypeNode, TypeTree};
