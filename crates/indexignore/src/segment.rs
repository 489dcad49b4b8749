use globset::{GlobBuilder, GlobMatcher};

/// One compiled token of a pattern body.
///
/// Matching dispatches on the tag. Glob tokens are compiled once when the
/// pattern is parsed, not per query.
#[derive(Clone, Debug)]
pub(crate) enum Segment {
    /// Plain name, compared for equality.
    Literal(String),
    /// Single-segment glob (`*`, `?`, `[...]`); never crosses a separator.
    Wildcard(GlobMatcher),
    /// `**` as a whole segment: any number of segments, including zero.
    AnyDepth,
}

impl Segment {
    /// Classifies one non-empty path segment of a rule body.
    ///
    /// `**` must stand alone to act as the multi-depth wildcard; embedded
    /// in a longer segment, adjacent stars collapse to a single `*` and
    /// the segment stays an ordinary glob. A segment whose glob syntax
    /// does not compile (e.g. an unclosed character class) is compared
    /// literally instead.
    pub(crate) fn parse(raw: &str) -> Self {
        if raw == "**" {
            return Self::AnyDepth;
        }
        if raw.contains(['*', '?', '[', '\\']) {
            let mut normalized = raw.to_owned();
            while normalized.contains("**") {
                normalized = normalized.replace("**", "*");
            }
            if let Ok(glob) = GlobBuilder::new(&normalized)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
            {
                return Self::Wildcard(glob.compile_matcher());
            }
        }
        Self::Literal(raw.to_owned())
    }

    /// Tests one path segment name against this token.
    pub(crate) fn matches_name(&self, name: &str) -> bool {
        match self {
            Self::Literal(literal) => literal == name,
            Self::Wildcard(matcher) => matcher.is_match(name),
            // The pattern walk consumes `**` structurally; as a plain name
            // test it accepts anything.
            Self::AnyDepth => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Segment;

    #[test]
    fn double_star_alone_is_any_depth() {
        assert!(matches!(Segment::parse("**"), Segment::AnyDepth));
    }

    #[test]
    fn plain_name_is_literal() {
        let segment = Segment::parse("build");
        assert!(matches!(segment, Segment::Literal(_)));
        assert!(segment.matches_name("build"));
        assert!(!segment.matches_name("builds"));
    }

    #[test]
    fn star_matches_within_one_segment() {
        let segment = Segment::parse("*.log");
        assert!(segment.matches_name("debug.log"));
        assert!(segment.matches_name(".log"));
        assert!(!segment.matches_name("debug.txt"));
    }

    #[test]
    fn question_mark_matches_single_character() {
        let segment = Segment::parse("file?");
        assert!(segment.matches_name("file1"));
        assert!(!segment.matches_name("file12"));
        assert!(!segment.matches_name("file"));
    }

    #[test]
    fn character_class_matches_range() {
        let segment = Segment::parse("file[0-9]");
        assert!(segment.matches_name("file7"));
        assert!(!segment.matches_name("filex"));
    }

    #[test]
    fn embedded_double_star_collapses_to_single_star() {
        let segment = Segment::parse("a**b");
        assert!(matches!(segment, Segment::Wildcard(_)));
        assert!(segment.matches_name("ab"));
        assert!(segment.matches_name("a-anything-b"));
        assert!(!segment.matches_name("a-anything-c"));
    }

    #[test]
    fn unclosed_class_falls_back_to_literal() {
        let segment = Segment::parse("file[0-9");
        assert!(matches!(segment, Segment::Literal(_)));
        assert!(segment.matches_name("file[0-9"));
        assert!(!segment.matches_name("file0"));
    }

    #[test]
    fn backslash_escapes_glob_metacharacters() {
        let segment = Segment::parse("not\\*star");
        assert!(segment.matches_name("not*star"));
        assert!(!segment.matches_name("notXstar"));
    }
}
