//! Flattening of type trees into field records.
//!
//! Every node of a [`TypeTree`] becomes one [`FieldRecord`], emitted in
//! pre-order. A child's resource id extends its parent's with the child's
//! role and its escaped name:
//!
//! ```text
//! <base>/<column>                        root
//! <parent>/subcolumns/<name>             struct field, union member
//! <parent>/values/<name>                 list element, map value
//! <parent>/keys/<name>                   map key
//! ```
//!
//! Unnamed children are named after their logical type token, so the element
//! of `list<string>` is called `string`.

use strata_foundation::{CatalogType, Result, UnknownTypeWarning};

use crate::config::MapperConfig;
use crate::parser::Parser;
use crate::tree::{ChildRole, NodeId, TypeTree};

/// One field of a materialized schema.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRecord {
    /// Field name, unescaped.
    pub name: String,
    /// Unique identifier of this field.
    pub resource_id: String,
    /// Identifier of the enclosing field, `None` for the root.
    pub parent_resource_id: Option<String>,
    /// The type token as written in the descriptor.
    pub logical_type: String,
    /// Canonical catalog type.
    pub kind: CatalogType,
    /// True for map keys.
    pub is_key: bool,
    /// True for list elements and map values.
    pub is_value: bool,
    /// Descriptors carry no nullability, so this is always true.
    pub is_nullable: bool,
    /// Nesting depth; 0 for the root.
    pub depth: usize,
}

/// Output of a materialization: the fields plus any non-fatal warnings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Materialized {
    /// Fields in pre-order.
    pub fields: Vec<FieldRecord>,
    /// One entry per field whose primitive type had no canonical mapping.
    pub warnings: Vec<UnknownTypeWarning>,
}

/// A node waiting on the worklist.
struct Pending {
    node: NodeId,
    name: String,
    parent: Option<String>,
    role: Option<ChildRole>,
    depth: usize,
}

/// Flattens a type tree into field records.
pub struct Materializer<'t> {
    tree: &'t TypeTree,
    config: MapperConfig,
}

impl<'t> Materializer<'t> {
    /// Creates a materializer with default settings.
    #[must_use]
    pub fn new(tree: &'t TypeTree) -> Self {
        Self {
            tree,
            config: MapperConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// Materializes the tree as a column called `root_name` under `base_id`.
    #[must_use]
    pub fn run(&self, root_name: &str, base_id: &str) -> Materialized {
        let scheme = self.config.scheme;
        let mut out = Materialized::default();
        let mut worklist = vec![Pending {
            node: self.tree.root(),
            name: root_name.to_string(),
            parent: None,
            role: None,
            depth: 0,
        }];

        while let Some(pending) = worklist.pop() {
            let node = self.tree.node(pending.node);
            let prefix = match (&pending.parent, pending.role) {
                (Some(parent), Some(role)) => {
                    format!("{parent}{}{}", scheme.delimiter, role.segment())
                }
                _ => base_id.to_string(),
            };
            let resource_id = format!(
                "{prefix}{}{}",
                scheme.delimiter,
                scheme.escape(&pending.name)
            );

            let kind = node.catalog_type().unwrap_or_else(|| {
                let warning = UnknownTypeWarning {
                    logical_type: node.logical_name.clone(),
                    resource_id: resource_id.clone(),
                };
                if self.config.report_unknown_types {
                    tracing::warn!(
                        logical_type = %warning.logical_type,
                        resource_id = %warning.resource_id,
                        "unknown type mapped to UNKNOWN"
                    );
                }
                out.warnings.push(warning);
                CatalogType::Unknown
            });

            // Reversed so the first child is popped first.
            for (role, member) in node.children().into_iter().rev() {
                let name = member
                    .name
                    .clone()
                    .unwrap_or_else(|| self.tree.node(member.node).logical_name.clone());
                worklist.push(Pending {
                    node: member.node,
                    name,
                    parent: Some(resource_id.clone()),
                    role: Some(role),
                    depth: pending.depth + 1,
                });
            }

            out.fields.push(FieldRecord {
                name: pending.name,
                resource_id,
                parent_resource_id: pending.parent,
                logical_type: node.logical_name.clone(),
                kind,
                is_key: pending.role == Some(ChildRole::Key),
                is_value: pending.role == Some(ChildRole::Value),
                is_nullable: true,
                depth: pending.depth,
            });
        }

        tracing::debug!(
            base_id,
            fields = out.fields.len(),
            warnings = out.warnings.len(),
            "materialized type tree"
        );
        out
    }
}

/// Materializes a tree whose root is named after its own type token.
#[must_use]
pub fn materialize(tree: &TypeTree, base_id: &str) -> Vec<FieldRecord> {
    let root_name = &tree.root_node().logical_name;
    Materializer::new(tree).run(root_name, base_id).fields
}

/// Materializes a tree as the column `name`.
#[must_use]
pub fn materialize_column(tree: &TypeTree, name: &str, base_id: &str) -> Vec<FieldRecord> {
    Materializer::new(tree).run(name, base_id).fields
}

/// Parses a column's descriptor and materializes it in one step.
///
/// # Errors
/// Returns a syntax error if the descriptor is malformed.
pub fn map_column(
    name: &str,
    descriptor: &str,
    base_id: &str,
    config: &MapperConfig,
) -> Result<Materialized> {
    let tree = Parser::new(descriptor).with_config(config).parse()?;
    Ok(Materializer::new(&tree).with_config(config.clone()).run(name, base_id))
}
