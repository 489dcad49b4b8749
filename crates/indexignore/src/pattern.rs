use crate::segment::Segment;

/// Compiled form of one ignore-rule line.
///
/// A pattern remembers the directory it was declared in (its *domain*, as a
/// segment sequence relative to the tree root) and only ever applies to
/// paths strictly inside that directory. The body is held as segment
/// tokens; see [`Pattern::parse`] for the accepted syntax.
#[derive(Clone, Debug)]
pub struct Pattern {
    domain: Vec<String>,
    segments: Vec<Segment>,
    negated: bool,
    dir_only: bool,
    anchored: bool,
}

/// Outcome of testing one pattern against one path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MatchResult {
    /// The pattern does not apply to the path.
    NoMatch,
    /// The pattern applies and excludes the path.
    Exclude,
    /// The pattern applies and re-includes the path (negated rule).
    Include,
}

impl Pattern {
    /// Compiles one rule line declared in `domain`.
    ///
    /// Returns `None` for blank lines, `#` comments, and bodies that
    /// reduce to nothing (such as a bare `/` or `!`). Parsing itself never
    /// fails: the rule format is forgiving user configuration, so
    /// questionable glob syntax is matched literally instead of being
    /// rejected.
    ///
    /// Syntax, applied in order:
    /// - a leading `\!` or `\#` escapes the special meaning of the first
    ///   character;
    /// - otherwise a leading `!` negates the rule;
    /// - a trailing unescaped `/` restricts the rule to directories;
    /// - a leading `/` anchors the rule to the domain, and any other `/`
    ///   left in the body anchors it as well; a slash-free body matches at
    ///   any depth below the domain;
    /// - the body splits on `/` into segments, dropping empty ones; `**`
    ///   as a whole segment matches any number of segments.
    #[must_use]
    pub fn parse(line: &str, domain: &[String]) -> Option<Self> {
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut negated = false;
        let mut body = line;
        if body.starts_with("\\!") || body.starts_with("\\#") {
            body = &body[1..];
        } else if let Some(rest) = body.strip_prefix('!') {
            negated = true;
            body = rest;
        }

        let mut dir_only = false;
        if body.ends_with('/') && !body.ends_with("\\/") {
            dir_only = true;
            body = &body[..body.len() - 1];
        }

        let anchored;
        if let Some(rest) = body.strip_prefix('/') {
            anchored = true;
            body = rest;
        } else {
            anchored = body.contains('/');
        }

        let segments: Vec<Segment> = body
            .split('/')
            .filter(|part| !part.is_empty())
            .map(Segment::parse)
            .collect();
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            domain: domain.to_vec(),
            segments,
            negated,
            dir_only,
            anchored,
        })
    }

    /// Returns the directory scope the rule was declared in.
    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns whether a match re-includes rather than excludes.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns whether the rule only matches directories.
    #[must_use]
    pub const fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Returns whether the body must align at the domain boundary.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Evaluates the pattern against a tree-rooted segment path.
    ///
    /// The path must be strictly longer than the domain and start with it;
    /// a pattern never matches its own domain directory. Tokens may
    /// consume a proper prefix of the post-domain remainder: the matched
    /// entity is then an ancestor directory of the queried path, and the
    /// query inherits the verdict (excluding a directory covers everything
    /// beneath it). A full-length match names the query itself, which is
    /// where `is_dir` is consulted for directory-only rules.
    pub(crate) fn matches(&self, path: &[String], is_dir: bool) -> MatchResult {
        if path.len() <= self.domain.len() {
            return MatchResult::NoMatch;
        }
        if !self.domain.iter().zip(path).all(|(d, p)| d == p) {
            return MatchResult::NoMatch;
        }

        let rel = &path[self.domain.len()..];
        let hit = if self.anchored {
            match_from(&self.segments, rel, 0, is_dir, self.dir_only)
        } else {
            (0..rel.len()).any(|offset| {
                match_from(&self.segments, &rel[offset..], 0, is_dir, self.dir_only)
            })
        };

        if !hit {
            MatchResult::NoMatch
        } else if self.negated {
            MatchResult::Include
        } else {
            MatchResult::Exclude
        }
    }
}

/// Matches `tokens` against `rel` starting at segment `pos`.
///
/// `**` explores every consumption count, zero segments included.
fn match_from(
    tokens: &[Segment],
    rel: &[String],
    pos: usize,
    is_dir: bool,
    dir_only: bool,
) -> bool {
    let Some((head, rest)) = tokens.split_first() else {
        // All tokens consumed. A proper-prefix match names an ancestor
        // directory, which always counts; a full match names the query
        // itself, where directory-only rules require a directory.
        return pos < rel.len() || is_dir || !dir_only;
    };
    match head {
        Segment::AnyDepth => {
            (pos..=rel.len()).any(|next| match_from(rest, rel, next, is_dir, dir_only))
        }
        _ => {
            pos < rel.len()
                && head.matches_name(&rel[pos])
                && match_from(rest, rel, pos + 1, is_dir, dir_only)
        }
    }
}
