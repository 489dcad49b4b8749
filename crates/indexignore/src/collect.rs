use std::path::PathBuf;

use crate::error::CollectError;
use crate::pattern::Pattern;
use crate::set::RuleSet;
use crate::source::TreeSource;
use crate::trace;

/// Compiles the rules of one file's contents into patterns scoped to
/// `domain`.
///
/// Lines are trimmed before parsing; blank lines and `#` comments
/// contribute nothing. Pattern order follows line order.
pub fn parse_rules(domain: &[String], text: &str) -> Vec<Pattern> {
    text.lines()
        .filter_map(|line| Pattern::parse(line.trim(), domain))
        .collect()
}

/// Gathers every rule file named `rule_file` under `source` into one
/// [`RuleSet`].
///
/// Traversal is depth-first: a directory's own rule file is compiled
/// before its subdirectories are visited, and each subdirectory's patterns
/// form a contiguous run after its parent's, which yields the ascending
/// priority order [`RuleSet`] requires. Subdirectories are visited in
/// ascending name order, so the result is a function of tree structure
/// alone.
///
/// # Errors
///
/// Fails fast with [`CollectError`] on the first directory listing or rule
/// file read that reports an I/O error. A directory without a rule file is
/// not an error.
pub fn collect_rules<S>(source: &S, rule_file: &str) -> Result<RuleSet, CollectError>
where
    S: TreeSource + ?Sized,
{
    let mut patterns = Vec::new();
    collect_dir(source, rule_file, &mut Vec::new(), &mut patterns)?;
    Ok(RuleSet::from_patterns(patterns))
}

fn collect_dir<S>(
    source: &S,
    rule_file: &str,
    domain: &mut Vec<String>,
    out: &mut Vec<Pattern>,
) -> Result<(), CollectError>
where
    S: TreeSource + ?Sized,
{
    let dir: PathBuf = domain.iter().collect();
    let mut entries = source
        .read_dir(&dir)
        .map_err(|error| CollectError::read_dir(dir.clone(), error))?;
    entries.sort_by(|a, b| a.name().cmp(b.name()));

    if entries
        .iter()
        .any(|entry| !entry.is_dir() && entry.name() == rule_file)
    {
        let path = dir.join(rule_file);
        let text = source
            .read_file(&path)
            .map_err(|error| CollectError::read_file(path, error))?;
        let compiled = parse_rules(domain, &text);
        trace::rules_loaded(&dir, rule_file, compiled.len());
        out.extend(compiled);
    }

    for entry in entries {
        if entry.is_dir() {
            domain.push(entry.name().to_owned());
            collect_dir(source, rule_file, domain, out)?;
            domain.pop();
        }
    }

    Ok(())
}
