//! Structural checks over reconciled folder trees.

use std::collections::{HashMap, HashSet};

use strata_foundation::{Error, Result};

use crate::folder::FolderEntity;

/// Checks that a set of folders forms a well-formed aggregation tree over
/// `leaves`.
///
/// The folders must have unique resource ids and no repeated direct children.
/// Every leaf must appear as a direct child of exactly one folder, and nothing
/// else may appear except subfolders. Every folder other than a single root
/// must be the child of exactly one folder whose path strictly encloses its
/// own. Paths grow strictly along every parent link, so a tree that passes
/// is acyclic.
///
/// # Errors
/// Returns a consistency error describing the first violation found.
pub fn verify_tree<S: AsRef<str>>(entities: &[FolderEntity], leaves: &[S]) -> Result<()> {
    let mut by_id: HashMap<&str, &FolderEntity> = HashMap::with_capacity(entities.len());
    for entity in entities {
        if by_id.insert(entity.resource_id.as_str(), entity).is_some() {
            return Err(Error::consistency(format!(
                "folder {} appears more than once",
                entity.resource_id
            )));
        }
    }

    let leaves: HashSet<&str> = leaves.iter().map(AsRef::as_ref).collect();
    let mut leaf_parent: HashMap<&str, &str> = HashMap::with_capacity(leaves.len());
    let mut folder_parent: HashMap<&str, &str> = HashMap::with_capacity(entities.len());

    for entity in entities {
        let mut seen = HashSet::with_capacity(entity.direct_children.len());
        for child in &entity.direct_children {
            let child = child.as_str();
            if !seen.insert(child) {
                return Err(Error::consistency(format!(
                    "{child} is listed twice under {}",
                    entity.resource_id
                )));
            }

            let parents = if let Some(folder) = by_id.get(child) {
                if folder.path.len() <= entity.path.len() || !folder.path.starts_with(&entity.path) {
                    return Err(Error::consistency(format!(
                        "folder {} is not nested inside {}",
                        folder.path, entity.path
                    )));
                }
                &mut folder_parent
            } else if leaves.contains(child) {
                if !child.starts_with(&entity.path) {
                    return Err(Error::consistency(format!(
                        "leaf {child} is not inside {}",
                        entity.path
                    )));
                }
                &mut leaf_parent
            } else {
                return Err(Error::consistency(format!(
                    "{child} under {} is neither a known leaf nor a folder",
                    entity.resource_id
                )));
            };

            if let Some(previous) = parents.insert(child, entity.resource_id.as_str()) {
                return Err(Error::consistency(format!(
                    "{child} is claimed by both {previous} and {}",
                    entity.resource_id
                )));
            }
        }
    }

    if let Some(missing) = leaves.iter().find(|leaf| !leaf_parent.contains_key(*leaf)) {
        return Err(Error::consistency(format!("leaf {missing} has no folder")));
    }

    let roots: Vec<&str> = entities
        .iter()
        .map(|e| e.resource_id.as_str())
        .filter(|id| !folder_parent.contains_key(id))
        .collect();
    if !entities.is_empty() && roots.len() != 1 {
        return Err(Error::consistency(format!(
            "expected one root folder, found {}",
            roots.len()
        )));
    }

    Ok(())
}
