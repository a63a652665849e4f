//! `flatten` is a library and command-line tool that turns a directory tree
//! into a single flat text document.
//!
//! It walks the target directory once, applying inclusion/exclusion rules
//! (the root `.gitignore`, VCS-directory and binary-file exclusion, optional
//! glob include/exclude lists), holds the visible tree in memory, and then
//! renders a summary, an ASCII tree diagram, and one metadata/content block
//! per file. Files whose bytes are identical to an earlier file emit a
//! reference to that file instead of a second copy of the body.
//!
//! The pipeline has two stages:
//! 1. **Build**: [`build`] walks the filesystem and assembles the ownership
//!    tree of visible entries, content included.
//! 2. **Render**: [`render`] serializes the tree with the configured
//!    metadata toggles and duplicate detection.
//!
//! # Example: Library Usage
//!
//! ```
//! use flatten::{build, render_to_string, Config};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join("hello.txt"), "Hello, world!").unwrap();
//!
//! let config = Config::new_for_test(temp.path());
//! let tree = build(&config).unwrap();
//! let document = render_to_string(&tree, &config.render).unwrap();
//!
//! assert!(document.starts_with("- Total files: 1\n"));
//! assert!(document.contains("└── hello.txt"));
//! assert!(document.contains("Hello, world!"));
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod tree;

// Re-export key public types for easier use as a library.
pub use config::{Config, FilterOptions, OutputDestination, RenderOptions};
pub use errors::{Error, Result};
pub use output::{render, render_to_string};
pub use tree::{build_tree, Entry};

use crate::filtering::VisibilityFilter;
use std::io::Write;

/// Builds the visible tree for the configured root directory.
///
/// Compiles the visibility filter (ignore file, glob lists) once, then walks
/// the tree depth-first. The root entry is always included; filtering applies
/// only to descendants.
///
/// # Errors
/// Returns an error for a malformed ignore file or glob pattern, and for any
/// stat/read/listing failure during the walk. All are fatal; there is no
/// partial-result recovery.
pub fn build(config: &Config) -> Result<Entry> {
    let filter = VisibilityFilter::new(&config.root, &config.filter)?;
    build_tree(&config.root, &filter)
}

/// Executes the complete pipeline: build the tree, render it into `writer`.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<()> {
    let tree = build(config)?;
    render(&tree, &config.render, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_basic() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.txt"), "hello")?;

        let config = Config::new_for_test(temp.path());
        let mut output = Vec::new();
        run(&config, &mut output)?;
        let output = String::from_utf8(output)?;

        assert!(output.starts_with("- Total files: 1\n- Total size: 5 bytes\n"));
        assert!(output.contains("└── a.txt\n"));
        assert!(output.contains("- content:\n```\nhello\n```\n"));
        Ok(())
    }

    #[test]
    fn test_run_ignored_subdir_scenario() -> anyhow::Result<()> {
        // root/a.txt ("hello"), root/sub/b.txt ("hello"), ignore file
        // excluding sub/: one file, five bytes, no reference to b.txt.
        let temp = tempdir()?;
        fs::write(temp.path().join("a.txt"), "hello")?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("sub/b.txt"), "hello")?;
        fs::write(temp.path().join(".gitignore"), "sub/\n.gitignore\n")?;

        let config = Config::new_for_test(temp.path());
        let mut output = Vec::new();
        run(&config, &mut output)?;
        let output = String::from_utf8(output)?;

        assert!(output.starts_with("- Total files: 1\n- Total size: 5 bytes\n"));
        assert!(output.contains("└── a.txt\n"));
        assert!(!output.contains("b.txt"));
        assert!(!output.contains("identical"));
        Ok(())
    }

    #[test]
    fn test_run_duplicate_content_reference() -> anyhow::Result<()> {
        // Same tree without the ignore exclusion: sub/b.txt's record is a
        // reference to a.txt's exact path, with no fenced body of its own.
        let temp = tempdir()?;
        fs::write(temp.path().join("a.txt"), "hello")?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("sub/b.txt"), "hello")?;

        let config = Config::new_for_test(temp.path());
        let mut output = Vec::new();
        run(&config, &mut output)?;
        let output = String::from_utf8(output)?;

        let a_path = temp.path().join("a.txt");
        let b_path = temp.path().join("sub").join("b.txt");
        assert!(output.contains(&format!(
            "- path: {}\n- content: Contents are identical to {}\n",
            b_path.display(),
            a_path.display()
        )));
        Ok(())
    }

    #[test]
    fn test_build_propagates_pattern_errors() {
        let temp = tempdir().unwrap();
        let mut config = Config::new_for_test(temp.path());
        config.filter.include_patterns = vec!["a[".to_string()];
        assert!(matches!(build(&config), Err(Error::Pattern { .. })));
    }
}
