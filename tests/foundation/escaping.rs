//! Integration tests for identifier escaping
//!
//! Tests segment escaping, splitting, joining, and custom schemes.

use proptest::prelude::*;
use strata_foundation::{ErrorKind, IdentifierScheme, escape, unescape};

// =============================================================================
// Segments
// =============================================================================

#[test]
fn plain_segments_are_unchanged() {
    assert_eq!(escape("report.csv"), "report.csv");
    assert_eq!(unescape("report.csv").unwrap(), "report.csv");
}

#[test]
fn delimiter_and_escape_are_prefixed() {
    assert_eq!(escape("a/b"), r"a\/b");
    assert_eq!(escape(r"c:\tmp"), r"c:\\tmp");
    assert_eq!(unescape(r"a\/b").unwrap(), "a/b");
}

#[test]
fn bad_escapes_are_rejected() {
    for token in [r"a\q", r"trailing\", "a/b"] {
        let err = unescape(token).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidIdentifier { .. }),
            "{token}"
        );
    }
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn split_respects_escaped_delimiters() {
    let scheme = IdentifierScheme::default();
    assert_eq!(scheme.split(r"a/b\/c/d").unwrap(), ["a", "b/c", "d"]);
    assert!(scheme.split("").unwrap().is_empty());
}

#[test]
fn split_folder_drops_trailing_delimiter() {
    let scheme = IdentifierScheme::default();
    assert_eq!(scheme.split("a/b/").unwrap(), ["a", "b", ""]);
    assert_eq!(scheme.split_folder("a/b/").unwrap(), ["a", "b"]);
    assert_eq!(scheme.split_folder("a/b").unwrap(), ["a", "b"]);
}

#[test]
fn join_folder_terminates_with_delimiter() {
    let scheme = IdentifierScheme::default();
    assert_eq!(scheme.join_folder(&["a", "b/c"]), r"a/b\/c/");
    assert_eq!(scheme.join_folder::<&str>(&[]), "");
}

#[test]
fn ends_with_delimiter_ignores_escaped() {
    let scheme = IdentifierScheme::default();
    assert!(scheme.ends_with_delimiter("a/"));
    assert!(!scheme.ends_with_delimiter(r"a\/"));
    assert!(scheme.ends_with_delimiter(r"a\\/"));
    assert!(!scheme.ends_with_delimiter("a"));
}

#[test]
fn custom_scheme() {
    let scheme = IdentifierScheme::new('.', '~').unwrap();
    assert_eq!(scheme.join(&["a.b", "c"]), "a~.b.c");
    assert_eq!(scheme.split("a~.b.c").unwrap(), ["a.b", "c"]);
}

#[test]
fn scheme_rejects_equal_characters() {
    assert!(IdentifierScheme::new('/', '/').is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn escape_round_trips(segment in ".*") {
        prop_assert_eq!(unescape(&escape(&segment)).unwrap(), segment);
    }

    #[test]
    fn join_then_split_round_trips(segments in prop::collection::vec(".+", 1..6)) {
        let scheme = IdentifierScheme::default();
        let joined = scheme.join(&segments);
        prop_assert_eq!(scheme.split(&joined).unwrap(), segments);
    }
}
