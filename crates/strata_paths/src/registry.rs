//! Persistent registry of folder entities.
//!
//! Scans of several top-level prefixes can rediscover the same folder. The
//! registry merges such folders by resource id, so callers thread one value
//! through successive reconciliations instead of sharing a global cache.
//!
//! Trees reconciled under different roots may disagree about where a folder
//! hangs: a scan of `a/` that never saw `a/b/` links `a/b/c/` straight to
//! `a/`. [`EntityRegistry::merge_nested`] re-links every folder to its
//! nearest registered ancestor after merging.

use std::collections::{BTreeMap, HashMap, HashSet};

use im::OrdMap;
use strata_foundation::{Error, IdentifierScheme, Result};

use crate::folder::FolderEntity;

/// Folder entities keyed by resource id, with structural sharing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    entities: OrdMap<String, FolderEntity>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the registry holds no folders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Gets a folder by resource id.
    #[must_use]
    pub fn get(&self, resource_id: &str) -> Option<&FolderEntity> {
        self.entities.get(resource_id)
    }

    /// Returns true if a folder with the resource id is registered.
    #[must_use]
    pub fn contains(&self, resource_id: &str) -> bool {
        self.entities.contains_key(resource_id)
    }

    /// Returns a new registry with the folder added. A folder already
    /// registered under the same resource id gains the new children it lacks.
    #[must_use]
    pub fn insert(&self, entity: FolderEntity) -> Self {
        let mut entities = self.entities.clone();
        Self::merge_into(&mut entities, entity);
        Self { entities }
    }

    /// Returns a new registry with every folder merged in.
    #[must_use]
    pub fn merge<I: IntoIterator<Item = FolderEntity>>(&self, folders: I) -> Self {
        let mut entities = self.entities.clone();
        for entity in folders {
            Self::merge_into(&mut entities, entity);
        }
        Self { entities }
    }

    /// Returns a new registry with every folder merged in and every folder
    /// linked under its nearest registered ancestor.
    ///
    /// Leaves stay with the folder that listed them. Subfolder links are
    /// rebuilt from the folder paths, split with `scheme`, so a folder is
    /// never listed under two parents. Each folder lists its leaves first,
    /// then its subfolders in path order.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if a folder path does not split under `scheme`.
    /// - `Consistency` if two folders with different resource ids share a path.
    pub fn merge_nested<I>(&self, folders: I, scheme: IdentifierScheme) -> Result<Self>
    where
        I: IntoIterator<Item = FolderEntity>,
    {
        self.merge(folders).relinked(scheme)
    }

    fn relinked(&self, scheme: IdentifierScheme) -> Result<Self> {
        let mut by_segments: BTreeMap<Vec<String>, &str> = BTreeMap::new();
        for entity in self.entities.values() {
            let segments = scheme.split_folder(&entity.path)?;
            if let Some(other) = by_segments.insert(segments, &entity.resource_id) {
                return Err(Error::consistency(format!(
                    "folders {other} and {} share the path {}",
                    entity.resource_id, entity.path
                )));
            }
        }

        let mut subfolders: HashMap<&str, Vec<String>> = HashMap::new();
        for (segments, id) in &by_segments {
            let parent = (0..segments.len())
                .rev()
                .find_map(|depth| by_segments.get(&segments[..depth]));
            if let Some(parent) = parent {
                subfolders.entry(*parent).or_default().push((*id).to_string());
            }
        }

        let folder_ids: HashSet<&str> = by_segments.values().copied().collect();
        let entities = self
            .entities
            .values()
            .map(|entity| {
                let mut relinked = FolderEntity::new(&entity.path, &entity.resource_id);
                relinked.direct_children = entity
                    .direct_children
                    .iter()
                    .filter(|child| !folder_ids.contains(child.as_str()))
                    .cloned()
                    .chain(
                        subfolders
                            .get(entity.resource_id.as_str())
                            .into_iter()
                            .flatten()
                            .cloned(),
                    )
                    .collect();
                (entity.resource_id.clone(), relinked)
            })
            .collect();
        Ok(Self { entities })
    }

    /// Iterates over folders in resource id order.
    pub fn iter(&self) -> impl Iterator<Item = &FolderEntity> {
        self.entities.values()
    }

    /// Returns the folders in resource id order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<FolderEntity> {
        self.iter().cloned().collect()
    }

    fn merge_into(entities: &mut OrdMap<String, FolderEntity>, entity: FolderEntity) {
        match entities.get_mut(&entity.resource_id) {
            Some(existing) => existing.absorb(entity.direct_children),
            None => {
                entities.insert(entity.resource_id.clone(), entity);
            }
        }
    }
}

impl FromIterator<FolderEntity> for EntityRegistry {
    fn from_iter<I: IntoIterator<Item = FolderEntity>>(iter: I) -> Self {
        Self::new().merge(iter)
    }
}
