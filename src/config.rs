//! Defines the immutable `Config` struct built from the CLI.
//!
//! All toggles live in one value that is threaded explicitly into the build
//! and render stages. There is no process-wide mutable flag state, so the
//! renderer can be exercised with several configurations in one process.

use crate::cli::Cli;
use std::path::PathBuf;

/// Options consumed by the visibility filter during the walk.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Include entries that the root ignore file would exclude.
    pub include_ignored: bool,
    /// Include the `.git` directory and everything beneath it.
    pub include_git: bool,
    /// Include files whose content is detected as binary.
    pub include_binary: bool,
    /// If non-empty, only files matching at least one of these globs are kept.
    /// Directories are unaffected so the walk can still descend into them.
    pub include_patterns: Vec<String>,
    /// Entries matching any of these globs are dropped.
    pub exclude_patterns: Vec<String>,
}

/// Options consumed by the renderer; one independent toggle per metadata line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit a `- last updated:` line (RFC 3339) per file.
    pub show_last_updated: bool,
    /// Emit a `- mode:` line with symbolic permissions per file.
    pub show_mode: bool,
    /// Emit a `- size:` line per file.
    pub show_size: bool,
    /// Emit a `- mime-type:` line per file.
    pub show_mime: bool,
    /// Emit a `- symlink-target:` line for symlinked files.
    pub show_symlink_targets: bool,
    /// Emit `- owner:` and `- group:` lines per file (unix only).
    pub show_ownership: bool,
    /// Emit a `- sha256:` line per file.
    pub show_checksum: bool,
    /// Disable duplicate detection; every file emits its full body.
    pub no_dedup: bool,
}

/// Where the rendered document should be written.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// The complete, validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory to flatten, as given on the command line.
    pub root: PathBuf,
    /// Filtering options for the walk.
    pub filter: FilterOptions,
    /// Rendering options for the output stage.
    pub render: RenderOptions,
    /// Where to write the rendered document.
    pub output_destination: OutputDestination,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        // --all-metadata implies every individual show toggle.
        let all = cli.all_metadata;
        Config {
            root: PathBuf::from(cli.directory),
            filter: FilterOptions {
                include_ignored: cli.include_gitignore,
                include_git: cli.include_git,
                include_binary: cli.include_bin,
                include_patterns: cli.include_patterns,
                exclude_patterns: cli.exclude_patterns,
            },
            render: RenderOptions {
                show_last_updated: all || cli.show_last_updated,
                show_mode: all || cli.show_mode,
                show_size: all || cli.show_size,
                show_mime: all || cli.show_mime,
                show_symlink_targets: all || cli.show_symlinks,
                show_ownership: all || cli.show_owner,
                show_checksum: all || cli.show_checksum,
                no_dedup: cli.no_dedup,
            },
            output_destination: match cli.output_file {
                Some(path) => OutputDestination::File(PathBuf::from(path)),
                None => OutputDestination::Stdout,
            },
        }
    }
}

impl Config {
    /// Creates a default `Config` rooted at the given path, for tests.
    #[doc(hidden)]
    pub fn new_for_test<P: Into<PathBuf>>(root: P) -> Self {
        Config {
            root: root.into(),
            filter: FilterOptions::default(),
            render: RenderOptions::default(),
            output_destination: OutputDestination::Stdout,
        }
    }
}
