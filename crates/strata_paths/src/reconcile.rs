//! Reconstruction of folder hierarchies from flat identifier lists.
//!
//! Object stores list files, not folders. Given the files discovered under a
//! root prefix and the folder prefixes that are known to exist, the
//! [`Reconciler`] rebuilds the folder tree:
//!
//! 1. Every leaf's parent folder is created if it is not already known.
//! 2. Each folder lists its own leaves first, in discovery order.
//! 3. Each folder is then attached to its nearest existing ancestor,
//!    defaulting to the root, so folders that were never listed are skipped
//!    over rather than invented.
//!
//! Paths are compared segment by segment after escape-aware splitting, never
//! by substring.

use std::collections::{BTreeMap, HashSet};

use strata_foundation::{Error, Result};

use crate::config::ReconcileConfig;
use crate::folder::FolderEntity;
use crate::path::{PathRecord, RootScope};
use crate::registry::EntityRegistry;
use crate::verify::verify_tree;

/// Rebuilds folder trees from discovered identifiers.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Creates a reconciler with the given configuration.
    #[must_use]
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Builds the folder tree below `root`.
    ///
    /// The result is ordered by path, root first. Leaves and folders outside
    /// `root` are ignored; repeated leaves count once.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if an identifier is not validly escaped.
    /// - `AmbiguousEntity` if a leaf equals the root, ends with the
    ///   delimiter, or shares its path with a folder or a folder's ancestor.
    /// - `Consistency` if the tree fails verification.
    pub fn reconcile<F, L>(
        &self,
        root: &str,
        known_folders: &[F],
        leaves: &[L],
    ) -> Result<Vec<FolderEntity>>
    where
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let scheme = self.config.scheme;
        let scope = RootScope::new(root, scheme)?;

        // Keyed by segments below the root; BTreeMap order puts parents
        // before their descendants.
        let mut folders: BTreeMap<Vec<String>, Vec<String>> = BTreeMap::new();
        folders.insert(Vec::new(), Vec::new());

        for folder in known_folders {
            let folder = folder.as_ref();
            match scope.record(folder, true)? {
                Some(record) => {
                    folders.entry(record.relative_segments).or_default();
                }
                None => tracing::debug!(folder, root, "folder outside root skipped"),
            }
        }

        let leaves = self.collect_leaves(&scope, leaves)?;

        for leaf in &leaves {
            let Some(parent) = leaf.parent_segments() else {
                continue;
            };
            if self.config.synthesize_ancestors {
                for depth in 1..parent.len() {
                    folders.entry(parent[..depth].to_vec()).or_default();
                }
            }
            folders.entry(parent.to_vec()).or_default();
        }

        // The first folder at or after a leaf's segments is the only one
        // that can equal the leaf or lie beneath it.
        for leaf in &leaves {
            let clashes = folders
                .range(leaf.relative_segments.clone()..)
                .next()
                .is_some_and(|(segments, _)| segments.starts_with(&leaf.relative_segments));
            if clashes {
                return Err(Error::ambiguous_entity(&leaf.full_identifier));
            }
        }

        for leaf in &leaves {
            let parent = leaf.parent_segments().unwrap_or_default();
            folders
                .get_mut(parent)
                .ok_or_else(|| {
                    Error::consistency(format!("no folder for leaf {}", leaf.full_identifier))
                })?
                .push(leaf.full_identifier.clone());
        }

        let mut links = Vec::new();
        for segments in folders.keys().filter(|s| !s.is_empty()) {
            let ancestor = (0..segments.len())
                .rev()
                .map(|depth| &segments[..depth])
                .find(|candidate| folders.contains_key(*candidate))
                .ok_or_else(|| {
                    let path = scope.folder_path(segments);
                    Error::consistency(format!("no ancestor for folder {path}"))
                })?;
            links.push((ancestor.to_vec(), self.resource_id(&scope, segments)));
        }
        for (ancestor, child) in links {
            folders
                .get_mut(&ancestor)
                .ok_or_else(|| Error::consistency(format!("no folder to link {child} into")))?
                .push(child);
        }

        let entities: Vec<FolderEntity> = folders
            .into_iter()
            .map(|(segments, direct_children)| FolderEntity {
                path: scope.folder_path(&segments),
                resource_id: self.resource_id(&scope, &segments),
                direct_children,
            })
            .collect();

        if self.config.verify {
            let leaf_ids: Vec<&str> = leaves.iter().map(|l| l.full_identifier.as_str()).collect();
            verify_tree(&entities, &leaf_ids)?;
        }

        tracing::debug!(
            root,
            folders = entities.len(),
            leaves = leaves.len(),
            "reconciled folder tree"
        );
        Ok(entities)
    }

    /// Reconciles `root` and merges the folders into `registry`, returning the
    /// updated registry. Folders are re-linked to their nearest registered
    /// ancestor, so roots may be merged in any order.
    ///
    /// # Errors
    /// Same as [`Reconciler::reconcile`] and [`EntityRegistry::merge_nested`].
    pub fn reconcile_into<F, L>(
        &self,
        registry: &EntityRegistry,
        root: &str,
        known_folders: &[F],
        leaves: &[L],
    ) -> Result<EntityRegistry>
    where
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let entities = self.reconcile(root, known_folders, leaves)?;
        registry.merge_nested(entities, self.config.scheme)
    }

    /// Positions leaves under the root, dropping repeats and out-of-scope
    /// identifiers.
    fn collect_leaves<L: AsRef<str>>(
        &self,
        scope: &RootScope,
        leaves: &[L],
    ) -> Result<Vec<PathRecord>> {
        let mut seen = HashSet::with_capacity(leaves.len());
        let mut records = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            let leaf = leaf.as_ref();
            if !seen.insert(leaf) {
                continue;
            }
            let Some(record) = scope.record(leaf, false)? else {
                tracing::debug!(leaf, "leaf outside root skipped");
                continue;
            };
            if record.relative_segments.is_empty() || self.config.scheme.ends_with_delimiter(leaf) {
                return Err(Error::ambiguous_entity(leaf));
            }
            records.push(record);
        }
        Ok(records)
    }

    fn resource_id(&self, scope: &RootScope, segments: &[String]) -> String {
        format!("{}{}", self.config.folder_id_prefix, scope.folder_path(segments))
    }
}

/// Reconciles with the default configuration.
///
/// # Errors
/// Same as [`Reconciler::reconcile`].
pub fn reconcile<F, L>(root: &str, known_folders: &[F], leaves: &[L]) -> Result<Vec<FolderEntity>>
where
    F: AsRef<str>,
    L: AsRef<str>,
{
    Reconciler::default().reconcile(root, known_folders, leaves)
}
