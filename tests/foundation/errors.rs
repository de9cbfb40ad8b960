//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use strata_foundation::{Error, ErrorContext, ErrorKind, UnknownTypeWarning};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_syntax() {
    let err = Error::syntax("expected '>'", 14, 15, "struct<a:int32");
    let ErrorKind::Syntax {
        offset,
        column,
        descriptor,
        ..
    } = &err.kind
    else {
        panic!("expected syntax error");
    };
    assert_eq!(*offset, 14);
    assert_eq!(*column, 15);
    assert_eq!(descriptor, "struct<a:int32");
}

#[test]
fn error_ambiguous_entity() {
    let err = Error::ambiguous_entity("a/b");
    assert!(matches!(err.kind, ErrorKind::AmbiguousEntity { .. }));
    assert!(format!("{err}").contains("a/b"));
}

#[test]
fn error_consistency() {
    let err = Error::consistency("leaf x has no folder");
    assert!(matches!(err.kind, ErrorKind::Consistency(_)));
    assert!(format!("{err}").contains("leaf x has no folder"));
}

#[test]
fn error_invalid_identifier() {
    let err = Error::invalid_identifier(r"a\q", "invalid escape sequence");
    let msg = format!("{err}");
    assert!(msg.contains(r"a\q"));
    assert!(msg.contains("invalid escape sequence"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_syntax_names_column_and_descriptor() {
    let err = Error::syntax("unexpected ','", 9, 10, "struct<a:,>");
    let msg = format!("{err}");
    assert!(msg.contains("column 10"));
    assert!(msg.contains("struct<a:,>"));
}

#[test]
fn error_display_file_format_lists_supported() {
    let err = Error::new(ErrorKind::InvalidFileFormat {
        path: "x.txt".to_string(),
        supported: ".csv, .parquet".to_string(),
    });
    let msg = format!("{err}");
    assert!(msg.contains("x.txt"));
    assert!(msg.contains(".csv, .parquet"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::consistency("x");
    assert!(err.context.is_none());
}

#[test]
fn context_records_unit_and_frames() {
    let err = Error::consistency("x").with_context(
        ErrorContext::new()
            .with_unit("bucket/data.csv")
            .with_frame("column payload"),
    );
    let context = err.context.unwrap();
    assert_eq!(context.unit.as_deref(), Some("bucket/data.csv"));
    assert_eq!(context.stack, ["column payload"]);
    let msg = format!("{context}");
    assert!(msg.contains("in bucket/data.csv"));
    assert!(msg.contains("in column payload"));
}

#[test]
fn errors_compare_by_value() {
    assert_eq!(Error::ambiguous_entity("a"), Error::ambiguous_entity("a"));
    assert_ne!(Error::ambiguous_entity("a"), Error::ambiguous_entity("b"));
}

// =============================================================================
// Warnings
// =============================================================================

#[test]
fn unknown_type_warning_display() {
    let warning = UnknownTypeWarning {
        logical_type: "geometry".to_string(),
        resource_id: "t/shape".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "unknown type `geometry` for field t/shape"
    );
}
