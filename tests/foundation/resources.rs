//! Integration tests for resource identifiers
//!
//! Tests storage ids and URL parsing.

use strata_foundation::{ErrorKind, ResourcePath, parse_s3_url, split_bucket_key};

#[test]
fn s3_ids() {
    let path = ResourcePath::s3("bucket");
    assert_eq!(path.base(), "//s3/cloud/aws/buckets/bucket");
    assert_eq!(
        path.key("dir/data.csv"),
        "//s3/cloud/aws/buckets/bucket/keys/dir/data.csv"
    );
    assert_eq!(
        path.columns("data.csv"),
        "//s3/cloud/aws/buckets/bucket/keys/data.csv/columns"
    );
}

#[test]
fn parse_url() {
    let (bucket, key) = parse_s3_url("s3://bucket/a/b.parquet").unwrap();
    assert_eq!(bucket, "bucket");
    assert_eq!(key, "a/b.parquet");
}

#[test]
fn parse_url_errors() {
    for url in ["http://bucket/x", "s3:///x"] {
        let err = parse_s3_url(url).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)), "{url}");
    }
}

#[test]
fn bucket_without_key() {
    assert_eq!(
        split_bucket_key("bucket"),
        ("bucket".to_string(), String::new())
    );
}
