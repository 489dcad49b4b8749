use std::sync::Arc;

use crate::pattern::{MatchResult, Pattern};

/// Ordered, immutable collection of compiled patterns for one tree.
///
/// Patterns are stored in ascending priority: rules collected from an
/// ancestor directory come before rules from its descendants, and lines
/// within one rule file keep their file order. Evaluation walks the list
/// from the end toward the beginning and stops at the first pattern that
/// applies, so "later wins" falls out of the storage order.
///
/// A `RuleSet` is cheaply cloneable (the patterns are behind an [`Arc`])
/// and safe to share across threads for concurrent lookups.
#[derive(Clone, Debug)]
pub struct RuleSet {
    patterns: Arc<[Pattern]>,
}

impl RuleSet {
    /// Builds a rule set from patterns already in ascending priority order.
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Pattern>,
    {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Returns `true` when no rule file contributed any pattern.
    ///
    /// An empty rule set excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when the path is excluded.
    ///
    /// Highest-priority patterns are consulted first; the first one that
    /// applies - directly or through an ancestor directory - fixes the
    /// verdict. Paths no pattern applies to are not excluded.
    pub(crate) fn is_excluded(&self, path: &[String], is_dir: bool) -> bool {
        self.patterns
            .iter()
            .rev()
            .find_map(|pattern| match pattern.matches(path, is_dir) {
                MatchResult::NoMatch => None,
                MatchResult::Exclude => Some(true),
                MatchResult::Include => Some(false),
            })
            .unwrap_or(false)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_patterns(Vec::new())
    }
}

impl FromIterator<Pattern> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self::from_patterns(iter)
    }
}
