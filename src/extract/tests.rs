//! Tests for argument extraction

use super::*;
use crate::error::Error;
use crate::pager::PageArgs;

// ============================================================================
// Pair Extraction Tests
// ============================================================================

#[test]
fn test_from_pairs_all_fields() {
    let args = from_pairs([
        ("after", "abc"),
        ("first", "10"),
        ("before", "def"),
        ("last", "20"),
    ])
    .unwrap();

    assert_eq!(
        args,
        PageArgs::new().after("abc").first(10).before("def").last(20)
    );
}

#[test]
fn test_from_pairs_empty_input() {
    let args = from_pairs(std::iter::empty::<(&str, &str)>()).unwrap();
    assert!(args.is_empty());
}

#[test]
fn test_from_pairs_ignores_unknown_params() {
    let args = from_pairs([("page", "3"), ("after", "abc"), ("sort", "desc")]).unwrap();
    assert_eq!(args, PageArgs::new().after("abc"));
}

#[test]
fn test_from_pairs_first_occurrence_wins() {
    let args = from_pairs([("after", "abcdef"), ("after", "ghijkl"), ("first", "10")]).unwrap();
    assert_eq!(args, PageArgs::new().after("abcdef").first(10));
}

#[test]
fn test_from_pairs_empty_first_occurrence_shadows_later_ones() {
    let args = from_pairs([("after", ""), ("after", "abc")]).unwrap();
    assert!(args.after.is_none());
}

#[test]
fn test_from_pairs_empty_values_are_absent() {
    let args = from_pairs([("after", ""), ("first", ""), ("before", ""), ("last", "")]).unwrap();
    assert!(args.is_empty());
}

#[test]
fn test_from_pairs_negative_count_normalized() {
    let args = from_pairs([("first", "-10")]).unwrap();
    assert_eq!(args.first, Some(10));

    let args = from_pairs([("last", "-7")]).unwrap();
    assert_eq!(args.last, Some(7));
}

#[test]
fn test_from_pairs_non_numeric_count_fails() {
    let err = from_pairs([("after", "abc"), ("first", "abc")]).unwrap_err();
    assert!(matches!(
        err,
        Error::ParseCount { ref field, ref value } if field == "first" && value == "abc"
    ));

    let err = from_pairs([("last", "12x")]).unwrap_err();
    assert!(matches!(err, Error::ParseCount { ref field, .. } if field == "last"));
}

#[test]
fn test_from_pairs_cursor_text_is_opaque() {
    // Cursors are never interpreted, arbitrary text passes through.
    let args = from_pairs([("before", "eyJpZCI6IDQyfQ==")]).unwrap();
    assert_eq!(args.before.as_deref(), Some("eyJpZCI6IDQyfQ=="));
}

// ============================================================================
// Query String Extraction Tests
// ============================================================================

#[test]
fn test_from_query_basic() {
    let args = from_query("after=abcdef&first=10").unwrap();
    assert_eq!(args, PageArgs::new().after("abcdef").first(10));
}

#[test]
fn test_from_query_repeated_param() {
    let args = from_query("after=abcdef&after=ghijkl&first=10").unwrap();
    assert_eq!(args, PageArgs::new().after("abcdef").first(10));
}

#[test]
fn test_from_query_percent_decoding() {
    let args = from_query("before=a%2Fb%3Dc&last=3").unwrap();
    assert_eq!(args, PageArgs::new().before("a/b=c").last(3));
}

#[test]
fn test_from_query_empty_string() {
    let args = from_query("").unwrap();
    assert!(args.is_empty());
}

#[test]
fn test_from_query_parse_failure_yields_no_bundle() {
    let result = from_query("after=abc&first=oops&last=5");
    assert!(result.is_err());
}
