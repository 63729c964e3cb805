//! End-to-end integration tests for the regeneration pipeline
//!
//! These exercise the complete flow: read lines -> rewrite region ->
//! format -> atomic write, across the library crates.

use pretty_assertions::assert_eq;
use splice_blocks::region::{RegionPatterns, rewrite};
use splice_fs::{Formatter, io};
use splice_test_utils::SourceTree;
use splice_test_utils::samples::{
    OPTIONS_EXPECTED, OPTIONS_PREFIX, OPTIONS_SEPARATOR, OPTIONS_SOURCE, OPTIONS_TARGET,
};
use std::path::Path;

fn patterns() -> RegionPatterns {
    RegionPatterns::compile(OPTIONS_PREFIX, OPTIONS_TARGET, OPTIONS_SEPARATOR).unwrap()
}

/// One library-level regeneration of `path` in place.
fn regenerate(path: &Path, formatter: Option<&Formatter>) {
    let lines = io::read_lines(path).unwrap();
    let mut out = Vec::new();
    rewrite(lines, &patterns(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let text = match formatter {
        Some(formatter) => formatter.format(&text).unwrap(),
        None => text,
    };
    io::write_text(path, &text).unwrap();
}

#[test]
fn test_file_round_trip_matches_expected() {
    let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);

    regenerate(&tree.path("api.go"), None);

    assert_eq!(tree.read("api.go"), OPTIONS_EXPECTED);
}

#[test]
fn test_repeated_regeneration_is_stable() {
    let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);
    let path = tree.path("api.go");

    regenerate(&path, None);
    let first = tree.read("api.go");
    regenerate(&path, None);
    let second = tree.read("api.go");

    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_identity_formatter_in_pipeline() {
    let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);

    regenerate(&tree.path("api.go"), Some(&Formatter::new("cat")));

    assert_eq!(tree.read("api.go"), OPTIONS_EXPECTED);
}

#[test]
fn test_outside_region_is_byte_identical() {
    let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);
    regenerate(&tree.path("api.go"), None);
    let output = tree.read("api.go");

    let marker = "// Valid option codes:\n";
    let (source_head, source_rest) = OPTIONS_SOURCE.split_at(OPTIONS_SOURCE.find(marker).unwrap());
    let (output_head, output_rest) = output.split_at(output.find(marker).unwrap());
    assert_eq!(source_head, output_head);

    let tail = |s: &str| s[s.find("\n//\n").unwrap()..].to_string();
    assert_eq!(tail(source_rest), tail(output_rest));
}
