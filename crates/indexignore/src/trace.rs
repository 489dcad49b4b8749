//! Feature-gated tracing for rule collection and matching.
//!
//! All instrumentation lives behind the `tracing` cargo feature and
//! compiles to no-op inline functions when the feature is disabled, so the
//! hot matching path carries no cost by default.

use std::path::Path;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const TARGET: &str = "indexignore";

/// Traces a rule file being compiled into the rule set.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn rules_loaded(dir: &Path, rule_file: &str, count: usize) {
    tracing::debug!(
        target: TARGET,
        dir = %dir.display(),
        rule_file = %rule_file,
        count = count,
        "rules_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rules_loaded(_dir: &Path, _rule_file: &str, _count: usize) {}

/// Traces the verdict for one query.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn verdict(path: &Path, is_dir: bool, ignored: bool) {
    tracing::trace!(
        target: TARGET,
        path = %path.display(),
        is_dir = is_dir,
        ignored = ignored,
        "verdict"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn verdict(_path: &Path, _is_dir: bool, _ignored: bool) {}
