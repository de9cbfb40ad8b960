//! Property tests for folder reconciliation
//!
//! Tests coverage, acyclicity, and idempotence over generated listings.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use strata_paths::{FolderEntity, ReconcileConfig, Reconciler};

const ROOT: &str = "r/";

// =============================================================================
// Strategies
// =============================================================================

/// Folder segments below the root; never end in `.csv`, so no folder can
/// collide with a leaf.
fn folder_segments() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", r"d\/e"]), 0..4)
}

fn leaf() -> impl Strategy<Value = String> {
    (folder_segments(), 0..4u8).prop_map(|(segments, file)| {
        let mut path = ROOT.to_string();
        for segment in segments {
            path.push_str(segment);
            path.push('/');
        }
        path.push_str(&format!("f{file}.csv"));
        path
    })
}

fn known_folder() -> impl Strategy<Value = String> {
    folder_segments().prop_map(|segments| {
        let mut path = ROOT.to_string();
        for segment in segments {
            path.push_str(segment);
            path.push('/');
        }
        path
    })
}

fn listing() -> impl Strategy<Value = (Vec<String>, Vec<String>, bool)> {
    (
        prop::collection::vec(known_folder(), 0..6),
        prop::collection::vec(leaf(), 0..20),
        any::<bool>(),
    )
}

fn reconciler(synthesize: bool) -> Reconciler {
    Reconciler::new(
        ReconcileConfig::new()
            .with_verify(false)
            .with_synthesize_ancestors(synthesize),
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn every_leaf_appears_exactly_once((folders, leaves, synthesize) in listing()) {
        let entities = reconciler(synthesize).reconcile(ROOT, &folders, &leaves).unwrap();
        let folder_ids: HashSet<&str> = entities.iter().map(|e| e.resource_id.as_str()).collect();
        let mut placed: Vec<&str> = entities
            .iter()
            .flat_map(|e| e.direct_children.iter().map(String::as_str))
            .filter(|child| !folder_ids.contains(child))
            .collect();
        placed.sort_unstable();

        let mut expected: Vec<&str> = leaves.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn no_folder_contains_itself((folders, leaves, synthesize) in listing()) {
        let entities = reconciler(synthesize).reconcile(ROOT, &folders, &leaves).unwrap();
        let by_id: HashMap<&str, &FolderEntity> =
            entities.iter().map(|e| (e.resource_id.as_str(), e)).collect();

        for start in &entities {
            let mut stack: Vec<&str> = start.direct_children.iter().map(String::as_str).collect();
            let mut visited = HashSet::new();
            while let Some(id) = stack.pop() {
                prop_assert_ne!(id, start.resource_id.as_str());
                if !visited.insert(id) {
                    continue;
                }
                if let Some(child) = by_id.get(id) {
                    stack.extend(child.direct_children.iter().map(String::as_str));
                }
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent((folders, leaves, synthesize) in listing()) {
        let reconciler = reconciler(synthesize);
        let first = reconciler.reconcile(ROOT, &folders, &leaves).unwrap();
        let second = reconciler.reconcile(ROOT, &folders, &leaves).unwrap();
        prop_assert_eq!(&first, &second);

        let discovered: Vec<&str> = first.iter().map(|e| e.path.as_str()).collect();
        let third = reconciler.reconcile(ROOT, &discovered, &leaves).unwrap();
        prop_assert_eq!(first, third);
    }

    #[test]
    fn output_verifies((folders, leaves, synthesize) in listing()) {
        let entities = reconciler(synthesize).reconcile(ROOT, &folders, &leaves).unwrap();
        prop_assert!(strata_paths::verify_tree(&entities, &leaves).is_ok());
    }
}
