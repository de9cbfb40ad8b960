//! Arena-allocated type trees.
//!
//! A parsed descriptor is stored as a flat vector of [`TypeNode`]s addressed
//! by [`NodeId`]. Children refer to nodes by index, so neither building nor
//! walking a tree needs recursion.

use std::fmt;

use strata_foundation::CatalogType;

use crate::token::Parameters;

/// Index of a node inside a [`TypeTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the raw index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child slot of a compound type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Name written in the descriptor, if any.
    pub name: Option<String>,
    /// The child type.
    pub node: NodeId,
}

impl Member {
    /// Creates a member.
    #[must_use]
    pub fn new(name: Option<String>, node: NodeId) -> Self {
        Self { name, node }
    }
}

/// Shape of a type node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// A leaf type such as `int32`.
    Primitive,
    /// Named fields, in declaration order.
    Struct(Vec<Member>),
    /// A single element type.
    List(Member),
    /// Key and value types.
    Map {
        /// The key type.
        key: Member,
        /// The value type.
        value: Member,
    },
    /// Alternatives, in declaration order.
    Union(Vec<Member>),
}

/// The role a child plays under its parent, which decides its identifier segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildRole {
    /// Struct field or union alternative.
    Subcolumn,
    /// Map key.
    Key,
    /// List element or map value.
    Value,
}

impl ChildRole {
    /// Returns the identifier segment placed between parent and child.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Subcolumn => "subcolumns",
            Self::Key => "keys",
            Self::Value => "values",
        }
    }
}

/// One parsed type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNode {
    /// The type token as written, e.g. `int32` or `struct`.
    pub logical_name: String,
    /// Parameter suffix such as `[ms]` or `(10, 2)`.
    pub parameters: Option<Parameters>,
    /// Shape and children.
    pub kind: TypeKind,
}

impl TypeNode {
    /// Returns the children of this node with their roles, in order.
    #[must_use]
    pub fn children(&self) -> Vec<(ChildRole, &Member)> {
        match &self.kind {
            TypeKind::Primitive => Vec::new(),
            TypeKind::Struct(members) | TypeKind::Union(members) => members
                .iter()
                .map(|m| (ChildRole::Subcolumn, m))
                .collect(),
            TypeKind::List(element) => vec![(ChildRole::Value, element)],
            TypeKind::Map { key, value } => vec![(ChildRole::Key, key), (ChildRole::Value, value)],
        }
    }

    /// Returns the canonical catalog type, or `None` for an unmapped primitive.
    #[must_use]
    pub fn catalog_type(&self) -> Option<CatalogType> {
        match self.kind {
            TypeKind::Primitive => CatalogType::from_logical_name(&self.logical_name),
            TypeKind::Struct(_) => Some(CatalogType::Struct),
            TypeKind::List(_) => Some(CatalogType::List),
            TypeKind::Map { .. } => Some(CatalogType::Map),
            TypeKind::Union(_) => Some(CatalogType::Union),
        }
    }

    /// Returns true for leaf types.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive)
    }
}

/// A parsed descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeTree {
    nodes: Vec<TypeNode>,
    root: NodeId,
}

impl TypeTree {
    /// Assembles a tree from parser output.
    pub(crate) fn from_parts(nodes: Vec<TypeNode>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// Returns the root node id.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if the id does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TypeNode {
        &self.nodes[id.index()]
    }

    /// Returns the root node.
    #[must_use]
    pub fn root_node(&self) -> &TypeNode {
        self.node(self.root)
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes. Parsed trees never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the maximum nesting depth; a lone primitive has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for (_, member) in self.node(id).children() {
                stack.push((member.node, depth + 1));
            }
        }
        deepest
    }
}

/// Rendering pieces queued by the iterative printer.
enum Piece<'a> {
    Node(NodeId),
    Text(&'static str),
    Name(&'a str),
    Params(&'a Parameters),
}

/// Writes a field name, quoting it when it would not lex as a bare word.
fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let bare = !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !matches!(c, '<' | '>' | ',' | ':' | '[' | ']' | '(' | ')' | '`' | '"')
        });
    if bare {
        f.write_str(name)
    } else {
        write!(f, "`{}`", name.replace('`', "``"))
    }
}

impl fmt::Display for TypeTree {
    /// Renders the tree back into descriptor syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self.root)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Name(name) => write_name(f, name)?,
                Piece::Params(params) => write!(f, "{params}")?,
                Piece::Node(id) => {
                    let node = self.node(id);
                    f.write_str(&node.logical_name)?;
                    let children = node.children();
                    let mut pending = Vec::new();
                    if !children.is_empty() {
                        pending.push(Piece::Text("<"));
                        for (i, (_, member)) in children.into_iter().enumerate() {
                            if i > 0 {
                                pending.push(Piece::Text(","));
                            }
                            if let Some(name) = &member.name {
                                pending.push(Piece::Name(name));
                                pending.push(Piece::Text(":"));
                            }
                            pending.push(Piece::Node(member.node));
                        }
                        pending.push(Piece::Text(">"));
                    }
                    if let Some(params) = &node.parameters {
                        pending.push(Piece::Params(params));
                    }
                    stack.extend(pending.into_iter().rev());
                }
            }
        }
        Ok(())
    }
}
