//! Fixture tests for descriptor materialization
//!
//! Each fixture pins the exact field sequence produced for a descriptor.

use strata_foundation::CatalogType;
use strata_schema::{FieldRecord, materialize, parse_type};

/// (name, resource id, parent id, canonical type, is key, is value)
type Expected<'a> = (&'a str, &'a str, Option<&'a str>, CatalogType, bool, bool);

fn check(descriptor: &str, expected: &[Expected<'_>]) {
    let tree = parse_type(descriptor).unwrap();
    let fields = materialize(&tree, "base");
    let actual: Vec<Expected<'_>> = fields
        .iter()
        .map(|f: &FieldRecord| {
            (
                f.name.as_str(),
                f.resource_id.as_str(),
                f.parent_resource_id.as_deref(),
                f.kind,
                f.is_key,
                f.is_value,
            )
        })
        .collect();
    assert_eq!(actual, expected, "{descriptor}");
}

#[test]
fn fixture_primitive() {
    check(
        "int32",
        &[("int32", "base/int32", None, CatalogType::Integer, false, false)],
    );
}

#[test]
fn fixture_list() {
    check(
        "list<string>",
        &[
            ("list", "base/list", None, CatalogType::List, false, false),
            (
                "string",
                "base/list/values/string",
                Some("base/list"),
                CatalogType::String,
                false,
                true,
            ),
        ],
    );
}

#[test]
fn fixture_map() {
    check(
        "map<string,int64>",
        &[
            ("map", "base/map", None, CatalogType::Map, false, false),
            (
                "string",
                "base/map/keys/string",
                Some("base/map"),
                CatalogType::String,
                true,
                false,
            ),
            (
                "int64",
                "base/map/values/int64",
                Some("base/map"),
                CatalogType::Integer,
                false,
                true,
            ),
        ],
    );
}

#[test]
fn fixture_struct_with_list() {
    check(
        "struct<a:int32,b:list<string>>",
        &[
            ("struct", "base/struct", None, CatalogType::Struct, false, false),
            (
                "a",
                "base/struct/subcolumns/a",
                Some("base/struct"),
                CatalogType::Integer,
                false,
                false,
            ),
            (
                "b",
                "base/struct/subcolumns/b",
                Some("base/struct"),
                CatalogType::List,
                false,
                false,
            ),
            (
                "string",
                "base/struct/subcolumns/b/values/string",
                Some("base/struct/subcolumns/b"),
                CatalogType::String,
                false,
                true,
            ),
        ],
    );
}

#[test]
fn fixture_struct_siblings() {
    let tree = parse_type("struct<a:int32,b:int32>").unwrap();
    let fields = materialize(&tree, "base");
    let children: Vec<&FieldRecord> = fields
        .iter()
        .filter(|f| f.parent_resource_id.as_deref() == Some("base/struct"))
        .collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name, "a");
    assert_eq!(children[1].name, "b");
    for child in children {
        assert_eq!(child.kind, CatalogType::Integer);
        assert!(!child.is_key);
        assert!(!child.is_value);
    }
}
