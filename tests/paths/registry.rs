//! Integration tests for the folder registry
//!
//! Tests merging of trees reconciled under overlapping roots.

use strata_paths::{verify_tree, EntityRegistry, ReconcileConfig, Reconciler};

const NONE: &[&str] = &[];

#[test]
fn registry_is_threaded_through_calls() {
    let reconciler = Reconciler::new(ReconcileConfig::new().with_verify(true));
    let empty = EntityRegistry::new();
    let first = reconciler
        .reconcile_into(&empty, "data/", NONE, &["data/2024/a.csv"])
        .unwrap();
    let second = reconciler
        .reconcile_into(&first, "data/2024/", NONE, &["data/2024/b.csv"])
        .unwrap();

    assert!(empty.is_empty());
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(
        second.get("data/2024/").unwrap().direct_children,
        ["data/2024/a.csv", "data/2024/b.csv"]
    );
    assert_eq!(
        first.get("data/2024/").unwrap().direct_children,
        ["data/2024/a.csv"]
    );
}

#[test]
fn disjoint_roots_coexist() {
    let reconciler = Reconciler::default();
    let registry = reconciler
        .reconcile_into(&EntityRegistry::new(), "a/", NONE, &["a/x.csv"])
        .unwrap();
    let registry = reconciler
        .reconcile_into(&registry, "b/", NONE, &["b/y.csv"])
        .unwrap();
    let ids: Vec<&str> = registry.iter().map(|f| f.resource_id.as_str()).collect();
    assert_eq!(ids, ["a/", "b/"]);
}

#[test]
fn prefixed_ids_key_the_registry() {
    let reconciler = Reconciler::new(ReconcileConfig::new().with_folder_id_prefix("bkt:"));
    let registry = reconciler
        .reconcile_into(&EntityRegistry::new(), "a/", NONE, &["a/x.csv"])
        .unwrap();
    assert!(registry.contains("bkt:a/"));
    assert!(!registry.contains("a/"));
}

#[test]
fn merge_order_does_not_change_the_tree() {
    let reconciler = Reconciler::new(ReconcileConfig::new().with_verify(true));
    let leaves = ["data/2024/01/a.csv", "data/2024/01/b.csv", "data/c.csv"];
    let shallow_first = reconciler
        .reconcile_into(&EntityRegistry::new(), "data/", NONE, &leaves[1..])
        .and_then(|r| reconciler.reconcile_into(&r, "data/2024/", NONE, &leaves[..1]))
        .unwrap();
    let deep_first = reconciler
        .reconcile_into(&EntityRegistry::new(), "data/2024/", NONE, &leaves[..1])
        .and_then(|r| reconciler.reconcile_into(&r, "data/", NONE, &leaves[1..]))
        .unwrap();

    for registry in [&shallow_first, &deep_first] {
        verify_tree(&registry.to_vec(), &leaves).unwrap();
        assert_eq!(
            registry.get("data/").unwrap().direct_children,
            ["data/c.csv", "data/2024/"]
        );
        assert_eq!(
            registry.get("data/2024/").unwrap().direct_children,
            ["data/2024/01/"]
        );
    }
}
