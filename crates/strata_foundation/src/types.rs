//! Canonical catalog types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical type a catalog field is published under.
///
/// Logical type names from columnar formats (`int32`, `large_utf8`,
/// `timestamp`, ...) are folded onto this closed set by
/// [`CatalogType::from_logical_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CatalogType {
    /// Signed and unsigned integers of every width.
    Integer,
    /// Floating point and decimal numbers.
    Number,
    /// Booleans.
    Boolean,
    /// Character data.
    String,
    /// Raw bytes.
    Binary,
    /// Time of day.
    Time,
    /// Dates and timestamps.
    #[cfg_attr(feature = "serde", serde(rename = "DATETIME"))]
    DateTime,
    /// Durations and intervals.
    Duration,
    /// Homogeneous lists.
    List,
    /// Key/value maps.
    Map,
    /// Records with named fields.
    Struct,
    /// Tagged unions.
    Union,
    /// A logical name with no known mapping.
    Unknown,
}

impl CatalogType {
    /// Maps a logical type name onto its canonical type.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for names outside
    /// the table; callers decide whether that degrades to
    /// [`CatalogType::Unknown`].
    #[must_use]
    pub fn from_logical_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let ty = match lower.as_str() {
            "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16" | "uint32" | "uint64"
            | "tinyint" | "smallint" | "int" | "integer" | "bigint" | "long" | "short"
            | "byte" => Self::Integer,
            "float8" | "float16" | "float32" | "float64" | "halffloat" | "float" | "double"
            | "real" | "decimal" | "decimal128" | "decimal256" | "numeric" => Self::Number,
            "bool" | "boolean" => Self::Boolean,
            "string" | "utf8" | "large_string" | "large_utf8" | "varchar" | "char" | "text" => {
                Self::String
            }
            "binary" | "large_binary" | "fixed_size_binary" | "varbinary" | "bytes" => {
                Self::Binary
            }
            "time32" | "time64" | "time" => Self::Time,
            "timestamp" | "date32" | "date64" | "date" | "datetime" => Self::DateTime,
            "duration" | "month_day_nano_interval" | "interval" => Self::Duration,
            "list" => Self::List,
            "map" => Self::Map,
            "struct" => Self::Struct,
            "union" => Self::Union,
            _ => return None,
        };
        Some(ty)
    }

    /// Like [`CatalogType::from_logical_name`], degrading to `Unknown`.
    #[must_use]
    pub fn normalize(name: &str) -> Self {
        Self::from_logical_name(name).unwrap_or(Self::Unknown)
    }

    /// Returns true for types that own child fields.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Struct | Self::Union)
    }

    /// Returns the name this type is published under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Binary => "BINARY",
            Self::Time => "TIME",
            Self::DateTime => "DATETIME",
            Self::Duration => "DURATION",
            Self::List => "LIST",
            Self::Map => "MAP",
            Self::Struct => "STRUCT",
            Self::Union => "UNION",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
