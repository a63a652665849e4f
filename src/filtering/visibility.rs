// src/filtering/visibility.rs

//! Combines the pattern engines, VCS-directory exclusion, and binary-file
//! exclusion into the single visibility decision used during the walk.

use crate::config::FilterOptions;
use crate::errors::Result;
use crate::filtering::binary::is_binary;
use crate::filtering::patterns::{GlobFilter, IgnoreRules};
use log::debug;
use std::path::{Path, PathBuf};

/// The VCS metadata directory excluded by default.
pub const VCS_DIR_NAME: &str = ".git";

/// Decides whether a filesystem entry is visible to the tree builder.
///
/// Built once per run from the target directory; immutable afterwards. The
/// root entry itself is never passed through this filter — filtering applies
/// only to descendants found during the walk.
pub struct VisibilityFilter {
    root: PathBuf,
    ignore: Option<IgnoreRules>,
    globs: GlobFilter,
    include_ignored: bool,
    include_git: bool,
    include_binary: bool,
}

impl VisibilityFilter {
    /// Compiles the ignore file (if present) and the glob lists for `root`.
    ///
    /// # Errors
    /// Returns an error if the ignore file or any glob pattern is malformed.
    pub fn new(root: &Path, options: &FilterOptions) -> Result<Self> {
        // With --include-gitignore there is no point compiling the rules;
        // they would be bypassed for every entry.
        let ignore = if options.include_ignored {
            None
        } else {
            IgnoreRules::load(root)?
        };
        Ok(VisibilityFilter {
            root: root.to_path_buf(),
            ignore,
            globs: GlobFilter::new(&options.include_patterns, &options.exclude_patterns)?,
            include_ignored: options.include_ignored,
            include_git: options.include_git,
            include_binary: options.include_binary,
        })
    }

    /// Returns `true` if the entry at `path` should appear in the tree.
    ///
    /// Decision order, first matching rule wins:
    /// 1. A `.git` segment in the root-relative path excludes, unless
    ///    `--include-git`. Segments above the root never participate, so
    ///    flattening a directory that itself lives under `.git` works.
    /// 2. Binary file content excludes, unless `--include-bin`.
    /// 3. A matching exclude glob excludes.
    /// 4. A non-empty include list that matches no pattern excludes (files only).
    /// 5. `--include-gitignore` includes, bypassing the ignore rules.
    /// 6. No ignore file at the root includes.
    /// 7. A positive ignore-rule match excludes; everything else is included.
    ///
    /// If the path cannot be made relative to the root, every check is
    /// skipped and the entry is included: a visibility error must never
    /// silently drop data the caller did not ask to exclude.
    pub fn include(&self, path: &Path, is_dir: bool) -> bool {
        let relative = match path.strip_prefix(&self.root) {
            Ok(rel) => rel,
            Err(_) => {
                debug!("Cannot relativize {:?} against {:?}, including", path, self.root);
                return true;
            }
        };

        if !self.include_git && has_vcs_segment(relative) {
            debug!("Excluding {:?}: VCS metadata directory", relative);
            return false;
        }

        if !is_dir && !self.include_binary {
            // A sniff failure is deliberately not an exclusion: the entry
            // stays visible and the subsequent full read reports the real,
            // fatal I/O error with path context.
            match is_binary(path) {
                Ok(true) => {
                    debug!("Excluding {:?}: binary content", path);
                    return false;
                }
                Ok(false) => {}
                Err(e) => debug!("Binary sniff failed for {:?} ({}), keeping entry", path, e),
            }
        }

        if self.globs.is_excluded(relative) {
            debug!("Excluding {:?}: exclude glob", relative);
            return false;
        }
        if !is_dir && !self.globs.is_included(relative) {
            debug!("Excluding {:?}: not matched by include globs", relative);
            return false;
        }

        if self.include_ignored {
            return true;
        }
        match &self.ignore {
            Some(rules) => !rules.is_ignored(relative, is_dir),
            None => true,
        }
    }
}

/// True if any segment of the root-relative path is the VCS metadata
/// directory name, so nested `.git` directories at any depth below the root
/// are caught, not merely a prefix match.
fn has_vcs_segment(path: &Path) -> bool {
    path.components()
        .any(|component| component.as_os_str() == VCS_DIR_NAME)
}
