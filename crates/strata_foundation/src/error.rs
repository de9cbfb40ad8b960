//! Error types for the Strata system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Strata operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which unit of work failed.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a descriptor syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, offset: usize, column: u32, descriptor: &str) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            offset,
            column,
            descriptor: descriptor.to_string(),
        })
    }

    /// Creates an ambiguous entity error for a path claimed by both a leaf and a folder.
    #[must_use]
    pub fn ambiguous_entity(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::AmbiguousEntity { path: path.into() })
    }

    /// Creates an internal consistency error.
    #[must_use]
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Consistency(message.into()))
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidIdentifier {
            identifier: identifier.into(),
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Malformed type descriptor.
    #[error("syntax error at column {column}: {message} in `{descriptor}`")]
    Syntax {
        /// Description of the problem.
        message: String,
        /// Byte offset into the descriptor.
        offset: usize,
        /// 1-based column of the offending token.
        column: u32,
        /// The full descriptor that failed to parse.
        descriptor: String,
    },

    /// A leaf identifier and a folder resolve to the same path.
    #[error("ambiguous entity: `{path}` is both an object and a folder")]
    AmbiguousEntity {
        /// The contested path.
        path: String,
    },

    /// An internal invariant was violated during reconciliation.
    #[error("consistency error: {0}")]
    Consistency(String),

    /// An identifier could not be split or unescaped.
    #[error("invalid identifier `{identifier}`: {message}")]
    InvalidIdentifier {
        /// The offending identifier.
        identifier: String,
        /// What was wrong with it.
        message: String,
    },

    /// A dataset path does not carry a supported file extension.
    #[error("unsupported file format for `{path}`, available formats are {supported}")]
    InvalidFileFormat {
        /// The dataset path.
        path: String,
        /// Comma-separated list of supported extensions.
        supported: String,
    },

    /// A storage URL could not be parsed.
    #[error("invalid storage url: {0}")]
    InvalidUrl(String),

    /// Encoding catalog records failed.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Context about which unit of work an error belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Dataset path, prefix, or column the error arose in.
    pub unit: Option<String>,
    /// Chain of enclosing operations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit of work.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(unit) = &self.unit {
            write!(f, "in {unit}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Non-fatal signal that a primitive type name had no canonical mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownTypeWarning {
    /// The logical type name as written in the descriptor.
    pub logical_type: String,
    /// Resource id of the field that carries the type.
    pub resource_id: String,
}

impl fmt::Display for UnknownTypeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown type `{}` for field {}",
            self.logical_type, self.resource_id
        )
    }
}

/// Result type alias for Strata operations.
pub type Result<T> = std::result::Result<T, Error>;
