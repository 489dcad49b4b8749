use std::path::{Component, Path, PathBuf};

use crate::collect::collect_rules;
use crate::error::CollectError;
use crate::set::RuleSet;
use crate::source::OsTree;
use crate::trace;

/// Classifies paths under one tree root as ignored or not.
///
/// A matcher is built once per tree snapshot and is immutable afterwards;
/// it can be cloned cheaply and queried concurrently from multiple threads
/// without locking. A changed tree requires building a new matcher.
///
/// # Examples
///
/// ```
/// use indexignore::Matcher;
/// use std::fs;
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join(".indexignore"), "/build/\n")?;
/// fs::create_dir(temp.path().join("build"))?;
///
/// let matcher = Matcher::new(temp.path(), ".indexignore")?;
/// assert!(matcher.is_ignored("build", true));
/// assert!(matcher.is_ignored("build/out.bin", false));
/// assert!(!matcher.is_ignored("src/main.rs", false));
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Matcher {
    root: PathBuf,
    rules: RuleSet,
}

impl Matcher {
    /// Builds a matcher by gathering every rule file named `rule_file`
    /// under `root` on the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] when a directory cannot be listed or a
    /// rule file cannot be read, including when `root` itself does not
    /// exist or is not readable.
    pub fn new(root: impl Into<PathBuf>, rule_file: &str) -> Result<Self, CollectError> {
        let root = root.into();
        let rules = collect_rules(&OsTree::new(root.clone()), rule_file)?;
        Ok(Self { root, rules })
    }

    /// Builds a matcher from an already collected rule set.
    ///
    /// Useful with rule sets collected from a non-filesystem
    /// [`TreeSource`](crate::TreeSource).
    #[must_use]
    pub fn with_rules(root: impl Into<PathBuf>, rules: RuleSet) -> Self {
        Self {
            root: root.into(),
            rules,
        }
    }

    /// Returns the tree root queries are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the collected rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns `true` when `path` is excluded by the collected rules.
    ///
    /// `path` may be absolute or relative to the tree root; `is_dir`
    /// states whether the candidate denotes a directory, which is what
    /// directory-only rules consult. The query never fails: paths that
    /// resolve outside the tree are simply not excluded.
    #[must_use]
    pub fn is_ignored(&self, path: impl AsRef<Path>, is_dir: bool) -> bool {
        let path = path.as_ref();
        let ignored = self
            .normalize(path)
            .is_some_and(|segments| self.rules.is_excluded(&segments, is_dir));
        trace::verdict(path, is_dir, ignored);
        ignored
    }

    /// Resolves a query into tree-rooted segments.
    ///
    /// Strips the root from absolute paths, drops `.` components, and
    /// resolves `..` against the preceding segment. Returns `None` when
    /// the path leaves the tree.
    fn normalize(&self, path: &Path) -> Option<Vec<String>> {
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root).ok()?
        } else {
            path
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => {
                    segments.pop()?;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(segments)
    }
}
