#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `indexignore` answers one question: given a directory tree containing
//! zero or more ignore-rule files (named by a configurable filename such as
//! `.indexignore`), is a candidate path excluded? Indexing and walking
//! tools consult it to skip unwanted files and directories. Rule files use
//! the familiar ignore syntax: one rule per line, `#` comments, `!`
//! negation, a trailing `/` for directory-only rules, a leading `/` for
//! rules anchored to the declaring directory, `*`/`?`/`[...]` as
//! single-segment globs, and `**` matching any number of whole segments.
//!
//! # Design
//!
//! - [`Pattern`] compiles one rule line together with the directory it was
//!   declared in (its *domain*) into a sequence of segment tokens plus the
//!   negation, directory-only, and anchoring flags. Compilation is
//!   permissive: questionable glob syntax is matched literally instead of
//!   being rejected, because rule files are user-authored configuration.
//! - [`RuleSet`] owns every compiled pattern for one tree in ascending
//!   priority order: rules from an ancestor directory come before rules
//!   from its descendants, and lines within one file keep their order.
//!   Evaluation scans from the end toward the beginning; the first
//!   matching pattern decides the verdict.
//! - [`Matcher`] pairs a rule set with the tree root, normalizes query
//!   paths, and exposes the boolean classification.
//! - [`TreeSource`] abstracts filesystem access down to two operations
//!   (list a directory, read a file) so collection runs identically
//!   against [`OsTree`] and an in-memory tree in tests.
//!
//! # Invariants
//!
//! - Later patterns override earlier ones: nested rule files take
//!   precedence over ancestor rule files, and later lines in one file take
//!   precedence over earlier lines.
//! - A rule never applies outside the directory subtree it was declared in.
//! - Excluding a directory excludes everything beneath it unless a
//!   higher-priority negated rule re-includes a specific path.
//! - A rule set is immutable once collected; a changed tree requires
//!   rebuilding the matcher.
//!
//! # Errors
//!
//! Only collection can fail: [`CollectError`] names the directory or rule
//! file that could not be read and carries the underlying I/O error.
//! Collection is fail-fast, so no partial rule set is ever observable.
//! Queries never fail; every path yields a boolean.
//!
//! # Examples
//!
//! ```
//! use indexignore::Matcher;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join(".indexignore"), "*.log\n!keep.log\n")?;
//!
//! let matcher = Matcher::new(temp.path(), ".indexignore")?;
//! assert!(matcher.is_ignored("debug.log", false));
//! assert!(!matcher.is_ignored("keep.log", false));
//! assert!(!matcher.is_ignored("notes.txt", false));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - [`globset`] for the glob matching primitives used by single-segment
//!   tokens.

mod collect;
mod error;
mod matcher;
mod pattern;
mod segment;
mod set;
mod source;
mod trace;

pub use collect::{collect_rules, parse_rules};
pub use error::CollectError;
pub use matcher::Matcher;
pub use pattern::Pattern;
pub use set::RuleSet;
pub use source::{OsTree, TreeEntry, TreeSource};
