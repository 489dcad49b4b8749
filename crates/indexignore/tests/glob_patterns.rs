//! Tests for glob tokens in rule bodies.
//!
//! `*` matches any run of characters within one segment, `?` exactly one
//! character, `[...]` a character class; none of them crosses a `/`. `**`
//! as a whole segment matches any number of segments, including zero, and
//! may open, sit inside, or close a pattern.

use indexignore::{Matcher, RuleSet, parse_rules};

fn matcher_for(rules_text: &str) -> Matcher {
    Matcher::with_rules("", RuleSet::from_patterns(parse_rules(&[], rules_text)))
}

// =============================================================================
// Single-Segment Globs
// =============================================================================

#[test]
fn star_matches_within_a_segment() {
    let matcher = matcher_for("/*.tmp\n");
    assert!(matcher.is_ignored("scratch.tmp", false));
    assert!(matcher.is_ignored(".tmp", false));
    assert!(!matcher.is_ignored("scratch.txt", false));
}

#[test]
fn star_does_not_cross_segments() {
    let matcher = matcher_for("/a*b\n");
    assert!(matcher.is_ignored("axxb", false));
    assert!(!matcher.is_ignored("a/b", false));
    assert!(!matcher.is_ignored("ax/xb", false));
}

#[test]
fn question_mark_matches_exactly_one_character() {
    let matcher = matcher_for("/log?\n");
    assert!(matcher.is_ignored("log1", false));
    assert!(!matcher.is_ignored("log", false));
    assert!(!matcher.is_ignored("log12", false));
}

#[test]
fn character_class_matches_listed_characters() {
    let matcher = matcher_for("/v[123]\n");
    assert!(matcher.is_ignored("v1", false));
    assert!(matcher.is_ignored("v3", false));
    assert!(!matcher.is_ignored("v4", false));
}

#[test]
fn character_class_supports_ranges() {
    let matcher = matcher_for("/rev-[a-f]\n");
    assert!(matcher.is_ignored("rev-c", false));
    assert!(!matcher.is_ignored("rev-z", false));
}

#[test]
fn globs_combine_with_multiple_segments() {
    let matcher = matcher_for("/logs/*.log\n");
    assert!(matcher.is_ignored("logs/app.log", false));
    assert!(!matcher.is_ignored("logs/app.txt", false));
    assert!(!matcher.is_ignored("other/app.log", false));
}

// =============================================================================
// Multi-Segment Wildcard
// =============================================================================

#[test]
fn double_star_matches_zero_segments() {
    let matcher = matcher_for("/really/**/file1\n");
    assert!(matcher.is_ignored("really/file1", false));
}

#[test]
fn double_star_matches_many_segments() {
    let matcher = matcher_for("/really/**/file1\n");
    assert!(matcher.is_ignored("really/long/path/to/file1", false));
    assert!(!matcher.is_ignored("really/long/path/to/file2", false));
}

#[test]
fn leading_double_star_matches_at_any_depth() {
    let matcher = matcher_for("**/generated\n");
    assert!(matcher.is_ignored("generated", true));
    assert!(matcher.is_ignored("src/deep/generated", true));
}

#[test]
fn trailing_double_star_matches_directory_contents() {
    let matcher = matcher_for("/cache/**\n");
    assert!(matcher.is_ignored("cache/a", false));
    assert!(matcher.is_ignored("cache/a/b/c", false));
    assert!(!matcher.is_ignored("cachier/a", false));
}

#[test]
fn double_star_combines_with_globs() {
    let matcher = matcher_for("/build/**/*.o\n");
    assert!(matcher.is_ignored("build/main.o", false));
    assert!(matcher.is_ignored("build/x/y/main.o", false));
    assert!(!matcher.is_ignored("build/x/y/main.c", false));
}

// =============================================================================
// Degenerate Glob Syntax
// =============================================================================

/// `**` embedded in a longer segment has no multi-segment meaning; it
/// degrades to an ordinary `*`.
#[test]
fn embedded_double_star_stays_within_one_segment() {
    let matcher = matcher_for("/a**b\n");
    assert!(matcher.is_ignored("ab", false));
    assert!(matcher.is_ignored("a-x-b", false));
    assert!(!matcher.is_ignored("a/b", false));
}

/// An unclosed character class never compiles as a glob; the rule matches
/// the segment text literally instead of being rejected.
#[test]
fn malformed_class_matches_literally() {
    let matcher = matcher_for("/file[0-9\n");
    assert!(matcher.is_ignored("file[0-9", false));
    assert!(!matcher.is_ignored("file5", false));
}
