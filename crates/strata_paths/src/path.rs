//! Identifiers relative to a scan root.

use strata_foundation::{IdentifierScheme, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One discovered object or known folder, positioned under a scan root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathRecord {
    /// The identifier exactly as discovered.
    pub full_identifier: String,
    /// Unescaped segments below the root.
    pub relative_segments: Vec<String>,
    /// True for folders, whose trailing delimiter is not a segment.
    pub is_folder: bool,
}

impl PathRecord {
    /// Returns the segments of the enclosing folder, or `None` at the root.
    #[must_use]
    pub fn parent_segments(&self) -> Option<&[String]> {
        self.relative_segments
            .split_last()
            .map(|(_, parent)| parent)
    }
}

/// The prefix a reconciliation is bounded by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootScope {
    scheme: IdentifierScheme,
    segments: Vec<String>,
}

impl RootScope {
    /// Creates a scope for a root prefix. A missing trailing delimiter is
    /// implied, and the empty prefix spans the whole namespace.
    ///
    /// # Errors
    /// Returns an error if the prefix is not a valid escaped identifier.
    pub fn new(root: &str, scheme: IdentifierScheme) -> Result<Self> {
        Ok(Self {
            scheme,
            segments: scheme.split_folder(root)?,
        })
    }

    /// Returns the scheme identifiers are split with.
    #[must_use]
    pub const fn scheme(&self) -> IdentifierScheme {
        self.scheme
    }

    /// Returns the unescaped segments of the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the folder path for segments relative to the root.
    #[must_use]
    pub fn folder_path(&self, relative: &[String]) -> String {
        let mut segments = self.segments.clone();
        segments.extend_from_slice(relative);
        self.scheme.join_folder(&segments)
    }

    /// Positions an identifier under the root.
    ///
    /// Returns `Ok(None)` when the identifier lies outside the root. Segments
    /// are compared whole, so `ab/x` is not under `a/`.
    ///
    /// # Errors
    /// Returns an error if the identifier is not a valid escaped identifier.
    pub fn record(&self, identifier: &str, is_folder: bool) -> Result<Option<PathRecord>> {
        let segments = if is_folder {
            self.scheme.split_folder(identifier)?
        } else {
            self.scheme.split(identifier)?
        };
        if !segments.starts_with(&self.segments) {
            return Ok(None);
        }
        Ok(Some(PathRecord {
            full_identifier: identifier.to_string(),
            relative_segments: segments[self.segments.len()..].to_vec(),
            is_folder,
        }))
    }
}
