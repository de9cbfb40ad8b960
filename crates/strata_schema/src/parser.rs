//! Parser for type descriptors.
//!
//! The parser converts a stream of tokens into a [`TypeTree`]. Compound types
//! nest without bound, so open compounds are kept on an explicit stack rather
//! than on the call stack.
//!
//! ```text
//! type     := IDENT params? | KEYWORD '<' member (',' member)* '>' params?
//! member   := (name ':')? type
//! KEYWORD  := struct | list | array | large_list | fixed_size_list
//!           | map | union | sparse_union | dense_union
//! ```

use std::collections::HashSet;

use strata_foundation::{Error, Result};

use crate::config::MapperConfig;
use crate::lexer::Lexer;
use crate::token::{Parameters, Span, Token, TokenKind};
use crate::tree::{Member, NodeId, TypeKind, TypeNode, TypeTree};

/// Families of compound types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Compound {
    Struct,
    List,
    Map,
    Union,
}

impl Compound {
    /// Recognizes a compound keyword, ignoring case.
    fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "struct" => Some(Self::Struct),
            "list" | "array" | "large_list" | "fixed_size_list" => Some(Self::List),
            "map" => Some(Self::Map),
            "union" | "sparse_union" | "dense_union" => Some(Self::Union),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::List => "list",
            Self::Map => "map",
            Self::Union => "union",
        }
    }
}

/// A compound whose members are still being read.
struct Frame {
    compound: Compound,
    logical_name: String,
    span: Span,
    members: Vec<Member>,
    /// Name of the member whose type is being parsed.
    pending_name: Option<String>,
}

/// Parser for a single type descriptor.
pub struct Parser<'src> {
    /// Source text (for error messages).
    source: &'src str,
    /// All tokens, ending with `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    position: usize,
    /// Deepest nesting allowed, if bounded.
    max_depth: Option<usize>,
    /// Nodes built so far; children precede their parents.
    nodes: Vec<TypeNode>,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given descriptor.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize_all(source),
            position: 0,
            max_depth: None,
            nodes: Vec::new(),
        }
    }

    /// Applies the limits of a mapper configuration.
    #[must_use]
    pub fn with_config(mut self, config: &MapperConfig) -> Self {
        self.max_depth = config.max_depth;
        self
    }

    /// Parses the descriptor into a type tree.
    ///
    /// # Errors
    /// Returns a syntax error if the descriptor is malformed, names an
    /// unknown compound type, gives a compound the wrong number of members,
    /// leaves a struct field unnamed, nests deeper than the configured limit,
    /// or has input after a complete type.
    pub fn parse(mut self) -> Result<TypeTree> {
        let mut stack: Vec<Frame> = Vec::new();

        let root = 'outer: loop {
            let token = self.advance();
            let name = match token.kind {
                TokenKind::Ident(name) => name,
                kind => return Err(self.unexpected(&kind, token.span, "type")),
            };

            if self.current().kind == TokenKind::LAngle {
                let Some(compound) = Compound::from_keyword(&name) else {
                    let message = format!("unknown compound type `{name}`");
                    return Err(self.error_at(token.span, &message));
                };
                self.advance();
                if self.max_depth.is_some_and(|max| stack.len() >= max) {
                    return Err(
                        self.error_at(token.span, "descriptor exceeds maximum nesting depth")
                    );
                }
                let pending_name = self.member_name(compound)?;
                stack.push(Frame {
                    compound,
                    logical_name: name,
                    span: token.span,
                    members: Vec::new(),
                    pending_name,
                });
                continue;
            }

            if Compound::from_keyword(&name).is_some() {
                return Err(self.error_at(token.span, &format!("`{name}` must be followed by '<'")));
            }

            let parameters = self.parameters();
            let mut id = self.push_node(
                TypeNode {
                    logical_name: name,
                    parameters,
                    kind: TypeKind::Primitive,
                },
                token.span,
            )?;

            // Attach the finished type to its parent, closing compounds as
            // their '>' arrives.
            loop {
                let Some(mut frame) = stack.pop() else {
                    break 'outer id;
                };
                let name = frame.pending_name.take();
                frame.members.push(Member::new(name, id));

                let token = self.advance();
                match token.kind {
                    TokenKind::Comma => {
                        frame.pending_name = self.member_name(frame.compound)?;
                        stack.push(frame);
                        continue 'outer;
                    }
                    TokenKind::RAngle => id = self.finish(frame)?,
                    kind => {
                        let expected = format!("',' or '>' in {}", frame.compound.name());
                        return Err(self.unexpected(&kind, token.span, &expected));
                    }
                }
            }
        };

        let trailing = self.current();
        match &trailing.kind {
            TokenKind::Eof => {}
            TokenKind::Error(message) => return Err(self.error_at(trailing.span, message)),
            _ => {
                return Err(self.error_at(trailing.span, "unexpected input after complete type"));
            }
        }

        Ok(TypeTree::from_parts(self.nodes, root))
    }

    /// Reads the optional `name:` prefix of a member and checks it against
    /// the compound's naming rules.
    fn member_name(&mut self, compound: Compound) -> Result<Option<String>> {
        let current = self.current();
        let span = current.span;

        if current.kind == TokenKind::RAngle {
            let message = format!("expected {} member, found '>'", compound.name());
            return Err(self.error_at(span, &message));
        }

        let name = match (&current.kind, self.peek_kind(1)) {
            (TokenKind::Ident(name) | TokenKind::Quoted(name), Some(TokenKind::Colon)) => {
                Some(name.clone())
            }
            (TokenKind::Quoted(_), _) => {
                return Err(self.error_at(span, "expected ':' after quoted name"));
            }
            _ => None,
        };

        if name.is_some() {
            self.advance();
            self.advance();
        }

        match (compound, name) {
            (Compound::Struct, None) => Err(self.error_at(span, "struct field requires a name")),
            (Compound::Map, Some(_)) => {
                Err(self.error_at(span, "map key and value cannot be named"))
            }
            (_, Some(name)) if name.is_empty() => {
                Err(self.error_at(span, "field name cannot be empty"))
            }
            (_, name) => Ok(name),
        }
    }

    /// Builds the node for a closed compound.
    fn finish(&mut self, frame: Frame) -> Result<NodeId> {
        let Frame {
            compound,
            logical_name,
            span,
            members,
            ..
        } = frame;

        let kind = match compound {
            Compound::Struct => {
                self.check_unique(&members, span)?;
                TypeKind::Struct(members)
            }
            Compound::Union => {
                self.check_unique(&members, span)?;
                TypeKind::Union(members)
            }
            Compound::List => {
                let [element] = <[Member; 1]>::try_from(members).map_err(|members| {
                    self.error_at(
                        span,
                        &format!("list takes exactly one element type, found {}", members.len()),
                    )
                })?;
                TypeKind::List(element)
            }
            Compound::Map => {
                let [key, value] = <[Member; 2]>::try_from(members).map_err(|members| {
                    self.error_at(
                        span,
                        &format!("map takes a key and a value type, found {}", members.len()),
                    )
                })?;
                TypeKind::Map { key, value }
            }
        };

        let parameters = self.parameters();
        self.push_node(
            TypeNode {
                logical_name,
                parameters,
                kind,
            },
            span,
        )
    }

    /// Rejects sibling members that would share a field name.
    fn check_unique(&self, members: &[Member], span: Span) -> Result<()> {
        let mut seen = HashSet::new();
        for member in members {
            let name = member
                .name
                .as_deref()
                .unwrap_or(&self.nodes[member.node.index()].logical_name);
            if !seen.insert(name) {
                return Err(self.error_at(span, &format!("duplicate member name `{name}`")));
            }
        }
        Ok(())
    }

    /// Consumes a parameter suffix if one follows.
    fn parameters(&mut self) -> Option<Parameters> {
        if let TokenKind::Params(params) = &self.current().kind {
            let params = params.clone();
            self.advance();
            Some(params)
        } else {
            None
        }
    }

    fn push_node(&mut self, node: TypeNode, span: Span) -> Result<NodeId> {
        let index = u32::try_from(self.nodes.len())
            .map_err(|_| self.error_at(span, "descriptor has too many types"))?;
        self.nodes.push(node);
        Ok(NodeId(index))
    }

    /// Returns the current token.
    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Returns the kind of the token `offset` places ahead.
    fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.position + offset).map(|t| &t.kind)
    }

    /// Returns the current token and moves past it. `Eof` is never passed.
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    /// Creates an error for a token that cannot appear here.
    fn unexpected(&self, kind: &TokenKind, span: Span, expected: &str) -> Error {
        match kind {
            TokenKind::Error(message) => self.error_at(span, message),
            other => self.error_at(span, &format!("expected {expected}, found {}", other.name())),
        }
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(message, span.start, span.column, self.source)
    }
}

/// Parses a type descriptor into a type tree.
///
/// # Errors
/// Returns a syntax error if the descriptor is malformed.
pub fn parse_type(descriptor: &str) -> Result<TypeTree> {
    Parser::new(descriptor).parse()
}
