// src/cli.rs

use clap::Parser;

/// Flattens a directory tree into a single annotated text document.
///
/// flatten recursively walks a directory, applies the root .gitignore (plus
/// optional glob include/exclude lists, VCS-directory and binary-file
/// exclusion), and prints a summary, an ASCII tree diagram, and one
/// metadata/content block per file. Files whose content is byte-identical to
/// an earlier file are emitted as a reference to that file instead of a
/// second copy of the body.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory to flatten.
    #[arg(default_value = ".")]
    pub directory: String,

    // --- Filtering Options ---
    /// Include files that would normally be ignored by .gitignore.
    #[arg(short = 'i', long, action = clap::ArgAction::SetTrue)]
    pub include_gitignore: bool,

    /// Include the .git directory and its contents.
    #[arg(short = 'g', long, action = clap::ArgAction::SetTrue)]
    pub include_git: bool,

    /// Include files detected as binary (default is to skip them).
    #[arg(long = "include-bin", action = clap::ArgAction::SetTrue)]
    pub include_bin: bool,

    /// Include only files matching these glob patterns (e.g. '*.go,*.js').
    #[arg(short = 'I', long = "include", value_name = "GLOB", value_delimiter = ',', num_args = 1..)]
    pub include_patterns: Vec<String>,

    /// Exclude files matching these glob patterns (e.g. '*.test.js').
    #[arg(short = 'E', long = "exclude", value_name = "GLOB", value_delimiter = ',', num_args = 1..)]
    pub exclude_patterns: Vec<String>,

    // --- Deduplication ---
    /// Disable duplicate-content detection; always emit full file bodies.
    #[arg(long = "no-dedup", action = clap::ArgAction::SetTrue)]
    pub no_dedup: bool,

    // --- Metadata Display Options ---
    /// Show the last-updated time for each file.
    #[arg(short = 'l', long = "last-updated", action = clap::ArgAction::SetTrue)]
    pub show_last_updated: bool,

    /// Show file permissions.
    #[arg(short = 'm', long = "show-mode", action = clap::ArgAction::SetTrue)]
    pub show_mode: bool,

    /// Show individual file sizes.
    #[arg(short = 'z', long = "show-size", action = clap::ArgAction::SetTrue)]
    pub show_size: bool,

    /// Show file MIME types.
    #[arg(short = 't', long = "show-mime", action = clap::ArgAction::SetTrue)]
    pub show_mime: bool,

    /// Show symlink targets.
    #[arg(short = 'y', long = "show-symlinks", action = clap::ArgAction::SetTrue)]
    pub show_symlinks: bool,

    /// Show file owner and group.
    #[arg(short = 'o', long = "show-owner", action = clap::ArgAction::SetTrue)]
    pub show_owner: bool,

    /// Show the SHA256 checksum of each file.
    #[arg(short = 'c', long = "show-checksum", action = clap::ArgAction::SetTrue)]
    pub show_checksum: bool,

    /// Show all available metadata (implies every show option above).
    #[arg(short = 'a', long = "all-metadata", action = clap::ArgAction::SetTrue)]
    pub all_metadata: bool,

    // --- Output Destination ---
    /// Write output to the specified file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["flatten"]);
        assert_eq!(cli.directory, ".");
        assert!(!cli.include_gitignore);
        assert!(!cli.include_git);
        assert!(!cli.no_dedup);
        assert!(cli.include_patterns.is_empty());
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn test_comma_separated_patterns() {
        let cli = Cli::parse_from(["flatten", ".", "-I", "*.go,*.js"]);
        assert_eq!(cli.include_patterns, vec!["*.go", "*.js"]);
    }

    #[test]
    fn test_repeated_exclude_patterns() {
        let cli = Cli::parse_from(["flatten", ".", "-E", "*.log", "-E", "target"]);
        assert_eq!(cli.exclude_patterns, vec!["*.log", "target"]);
    }

    #[test]
    fn test_all_metadata_flag() {
        let cli = Cli::parse_from(["flatten", "some/dir", "-a"]);
        assert_eq!(cli.directory, "some/dir");
        assert!(cli.all_metadata);
        assert!(!cli.show_mode); // normalization happens in Config, not clap
    }
}
