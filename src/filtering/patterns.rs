// src/filtering/patterns.rs

//! Pattern engines: compiled ignore-file rules and glob include/exclude lists.
//!
//! Both are compiled once at filter construction and immutable afterwards.
//! They expose one capability each: does this relative path match?

use crate::errors::{Error, Result};
use glob::Pattern;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;
use std::path::Path;

/// The name of the ignore file honored at the root of the walk.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// The compiled rules of a single ignore file.
///
/// Standard ignore-file semantics apply: later patterns override earlier
/// ones, a leading `!` re-includes, unanchored patterns match at any depth,
/// and patterns are relative to the ignore file's location.
pub struct IgnoreRules {
    rules: Gitignore,
}

impl IgnoreRules {
    /// Loads and compiles the ignore file at the root of `dir`.
    ///
    /// Returns `Ok(None)` when no ignore file is present, which callers treat
    /// as "include everything".
    ///
    /// # Errors
    /// Returns [`Error::IgnoreFile`] if the ignore file exists but cannot be
    /// compiled.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let ignore_path = dir.join(IGNORE_FILE_NAME);
        if !ignore_path.is_file() {
            debug!("No ignore file at {:?}", ignore_path);
            return Ok(None);
        }

        let mut builder = GitignoreBuilder::new(dir);
        if let Some(source) = builder.add(&ignore_path) {
            return Err(Error::IgnoreFile {
                path: ignore_path.display().to_string(),
                source,
            });
        }
        let rules = builder.build().map_err(|source| Error::IgnoreFile {
            path: ignore_path.display().to_string(),
            source,
        })?;
        debug!(
            "Compiled {} ignore patterns from {:?}",
            rules.num_ignores() + rules.num_whitelists(),
            ignore_path
        );
        Ok(Some(IgnoreRules { rules }))
    }

    /// Tests a root-relative path against the compiled rules.
    ///
    /// `is_dir` matters for trailing-slash patterns like `sub/`.
    pub fn is_ignored(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.rules.matched(relative_path, is_dir).is_ignore()
    }
}

/// Compiled glob include/exclude lists from `-I`/`-E`.
///
/// Each pattern is tested against both the root-relative path and the bare
/// file name, so `*.go` matches `pkg/util/helpers.go` without needing `**`.
#[derive(Default)]
pub struct GlobFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl GlobFilter {
    /// Compiles both pattern lists.
    ///
    /// # Errors
    /// Returns [`Error::Pattern`] naming the first malformed pattern.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(GlobFilter {
            include: compile_globs(include)?,
            exclude: compile_globs(exclude)?,
        })
    }

    /// True if any exclude pattern matches the path or its file name.
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        matches_any(&self.exclude, relative_path)
    }

    /// True if the include list is empty or any pattern matches the path or
    /// its file name. Only files are subject to this test; directories must
    /// stay visible so the walk can reach matching files beneath them.
    pub fn is_included(&self, relative_path: &Path) -> bool {
        self.include.is_empty() || matches_any(&self.include, relative_path)
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], relative_path: &Path) -> bool {
    patterns.iter().any(|pattern| {
        if pattern.matches_path(relative_path) {
            return true;
        }
        relative_path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn rules_from(content: &str) -> IgnoreRules {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(IGNORE_FILE_NAME), content).unwrap();
        IgnoreRules::load(temp.path()).unwrap().unwrap()
    }

    #[test]
    fn test_load_returns_none_without_ignore_file() {
        let temp = tempdir().unwrap();
        assert!(IgnoreRules::load(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_malformed_ignore_file_is_fatal() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(IGNORE_FILE_NAME), "a[\n").unwrap();
        let result = IgnoreRules::load(temp.path());
        assert!(matches!(result, Err(Error::IgnoreFile { .. })));
    }

    #[test]
    fn test_simple_pattern() {
        let rules = rules_from("*.log\n");
        assert!(rules.is_ignored(Path::new("debug.log"), false));
        assert!(!rules.is_ignored(Path::new("debug.txt"), false));
    }

    #[test]
    fn test_pattern_matches_at_any_depth() {
        let rules = rules_from("*.log\n");
        assert!(rules.is_ignored(Path::new("nested/dir/debug.log"), false));
    }

    #[test]
    fn test_anchored_pattern_matches_root_only() {
        let rules = rules_from("/debug.log\n");
        assert!(rules.is_ignored(Path::new("debug.log"), false));
        assert!(!rules.is_ignored(Path::new("nested/debug.log"), false));
    }

    #[test]
    fn test_negation_overrides_earlier_pattern() {
        let rules = rules_from("*.log\n!keep.log\n");
        assert!(rules.is_ignored(Path::new("debug.log"), false));
        assert!(!rules.is_ignored(Path::new("keep.log"), false));
    }

    #[test]
    fn test_later_pattern_wins() {
        let rules = rules_from("!keep.log\n*.log\n");
        assert!(rules.is_ignored(Path::new("keep.log"), false));
    }

    #[test]
    fn test_directory_pattern() {
        let rules = rules_from("sub/\n");
        assert!(rules.is_ignored(Path::new("sub"), true));
        assert!(!rules.is_ignored(Path::new("sub"), false));
    }

    #[test]
    fn test_glob_filter_empty_includes_everything() {
        let filter = GlobFilter::new(&[], &[]).unwrap();
        assert!(filter.is_included(Path::new("anything.rs")));
        assert!(!filter.is_excluded(Path::new("anything.rs")));
    }

    #[test]
    fn test_glob_filter_include_matches_basename_at_depth() {
        let filter = GlobFilter::new(&["*.go".to_string()], &[]).unwrap();
        assert!(filter.is_included(Path::new("main.go")));
        assert!(filter.is_included(Path::new("pkg/util/helpers.go")));
        assert!(!filter.is_included(Path::new("pkg/util/helpers.rs")));
    }

    #[test]
    fn test_glob_filter_exclude() {
        let filter = GlobFilter::new(&[], &["*.test.js".to_string()]).unwrap();
        assert!(filter.is_excluded(Path::new("app.test.js")));
        assert!(filter.is_excluded(Path::new("src/app.test.js")));
        assert!(!filter.is_excluded(Path::new("src/app.js")));
    }

    #[test]
    fn test_glob_filter_relative_path_pattern() {
        let filter = GlobFilter::new(&[], &["docs/*".to_string()]).unwrap();
        assert!(filter.is_excluded(Path::new("docs/readme.md")));
        assert!(!filter.is_excluded(Path::new("src/readme.md")));
    }

    #[test]
    fn test_malformed_glob_is_fatal() {
        let result = GlobFilter::new(&["a[".to_string()], &[]);
        assert!(matches!(result, Err(Error::Pattern { .. })));
    }
}
