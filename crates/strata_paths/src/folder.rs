//! Folder aggregation records.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A folder and the files and subfolders directly inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FolderEntity {
    /// Full folder path, terminated by the delimiter.
    pub path: String,
    /// Identifier of this folder.
    pub resource_id: String,
    /// Leaf identifiers, then subfolder resource ids.
    pub direct_children: Vec<String>,
}

impl FolderEntity {
    /// Creates a folder with no children.
    #[must_use]
    pub fn new(path: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resource_id: resource_id.into(),
            direct_children: Vec::new(),
        }
    }

    /// Returns true if `child` is directly inside this folder.
    #[must_use]
    pub fn contains(&self, child: &str) -> bool {
        self.direct_children.iter().any(|c| c == child)
    }

    /// Appends children not already present, keeping first-seen order.
    pub fn absorb<I, S>(&mut self, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.direct_children.iter().cloned().collect();
        for child in children {
            let child = child.into();
            if seen.insert(child.clone()) {
                self.direct_children.push(child);
            }
        }
    }
}
