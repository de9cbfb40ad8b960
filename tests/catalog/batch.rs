//! Integration tests for catalog batches
//!
//! Tests end-to-end assembly and per-unit failure isolation.

use std::thread;

use strata_catalog::{CatalogBatch, CatalogConfig, CatalogRecord, DatasetFormat};
use strata_foundation::{CatalogType, ErrorKind};
use strata_paths::ReconcileConfig;

const NONE: &[&str] = &[];

fn listing() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        ("sales/2024/q1.csv", vec![("id", "int64"), ("amount", "decimal128(10, 2)")]),
        (
            "sales/2024/q2.parquet",
            vec![("id", "int64"), ("lines", "list<struct<sku:string,qty:int32>>")],
        ),
        ("sales/readme.json", vec![("doc", "string")]),
    ]
}

#[test]
fn bucket_scan_end_to_end() {
    let config = CatalogConfig::new().with_reconcile(
        ReconcileConfig::new()
            .with_verify(true)
            .with_folder_id_prefix("//s3/cloud/aws/buckets/b/keys/"),
    );
    let mut batch = CatalogBatch::new(&config);
    let listing = listing();
    for (key, columns) in &listing {
        assert!(batch.add_dataset(&format!("s3://b/{key}"), columns, None));
    }
    let leaves: Vec<&str> = listing.iter().map(|(key, _)| *key).collect();
    assert!(batch.add_folder_tree("sales/", NONE, &leaves));

    assert!(batch.failures().is_empty());
    assert_eq!(batch.datasets().len(), 3);
    assert_eq!(batch.datasets()[1].format, DatasetFormat::Parquet);
    assert_eq!(batch.datasets()[2].format, DatasetFormat::Json);

    let lines: Vec<_> = batch.datasets()[1]
        .fields
        .iter()
        .filter(|f| f.name == "lines" || f.parent_resource_id.is_some())
        .map(|f| (f.name.as_str(), f.kind))
        .collect();
    assert_eq!(
        lines,
        [
            ("lines", CatalogType::List),
            ("struct", CatalogType::Struct),
            ("sku", CatalogType::String),
            ("qty", CatalogType::Integer),
        ]
    );

    let root = batch.folders().get("//s3/cloud/aws/buckets/b/keys/sales/").unwrap();
    assert_eq!(
        root.direct_children,
        [
            "sales/readme.json",
            "//s3/cloud/aws/buckets/b/keys/sales/2024/",
        ]
    );

    let records = batch.records();
    assert_eq!(records.len(), 5);
    assert!(records[..3].iter().all(|r| matches!(r, CatalogRecord::Dataset(_))));
    assert!(records[3..].iter().all(|r| matches!(r, CatalogRecord::Folder(_))));
}

#[test]
fn one_bad_dataset_does_not_abort_others() {
    let mut batch = CatalogBatch::default();
    batch.add_dataset("b/good.csv", &[("a", "int32")], None);
    batch.add_dataset("b/bad.csv", &[("a", "int32"), ("b", "foo<bar>")], None);
    batch.add_dataset("b/also_good.csv", &[("a", "int32")], None);

    assert_eq!(batch.datasets().len(), 2);
    assert_eq!(batch.failures().len(), 1);
    let failure = &batch.failures()[0];
    assert_eq!(failure.unit, "b/bad.csv");
    assert!(matches!(failure.error.kind, ErrorKind::Syntax { .. }));
    let context = failure.error.context.as_ref().unwrap();
    assert_eq!(context.stack, ["column b"]);
}

#[test]
fn one_bad_tree_does_not_abort_others() {
    let mut batch = CatalogBatch::default();
    assert!(!batch.add_folder_tree("x/", &["x/y/"], &["x/y"]));
    assert!(batch.add_folder_tree("z/", NONE, &["z/w.csv"]));
    assert_eq!(batch.folders().len(), 1);
    assert!(matches!(
        batch.failures()[0].error.kind,
        ErrorKind::AmbiguousEntity { .. }
    ));
}

#[test]
fn unknown_types_are_warnings_not_failures() {
    let mut batch = CatalogBatch::default();
    assert!(batch.add_dataset("b/geo.parquet", &[("shape", "geometry")], None));
    assert_eq!(batch.warnings().len(), 1);
    assert_eq!(batch.warnings()[0].logical_type, "geometry");
    assert_eq!(batch.datasets()[0].fields[0].kind, CatalogType::Unknown);
}

#[test]
fn independent_batches_run_concurrently() {
    let prefixes = ["a", "b", "c", "d"];
    let batches: Vec<CatalogBatch> = thread::scope(|scope| {
        let handles: Vec<_> = prefixes
            .iter()
            .map(|prefix| {
                scope.spawn(move || {
                    let mut batch = CatalogBatch::default();
                    let leaves: Vec<String> =
                        (0..50).map(|i| format!("{prefix}/{}/f{i}.csv", i % 5)).collect();
                    for leaf in &leaves {
                        batch.add_dataset(&format!("bucket/{leaf}"), &[("v", "int32")], None);
                    }
                    batch.add_folder_tree(&format!("{prefix}/"), NONE, &leaves);
                    batch
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    for batch in &batches {
        assert!(batch.failures().is_empty());
        assert_eq!(batch.datasets().len(), 50);
        assert_eq!(batch.folders().len(), 6);
    }
}
