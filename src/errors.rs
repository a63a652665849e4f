//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while building or rendering a directory tree, carrying the
//! offending path or pattern so callers can report something actionable.

use thiserror::Error;

/// A convenient `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while filtering, walking, or rendering a directory tree.
///
/// Every filesystem failure is fatal to the whole operation: a silently
/// truncated flattened view would misrepresent the tree, so there is no
/// partial-result recovery.
#[derive(Error, Debug)]
pub enum Error {
    /// A path could not be stat'ed (does not exist or is inaccessible).
    #[error("failed to stat path '{path}': {source}")]
    Stat {
        /// The path that could not be stat'ed.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but its content could not be read.
    #[error("failed to read file '{path}': {source}")]
    Read {
        /// The file whose content could not be read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A directory exists but its entries could not be listed.
    #[error("failed to read directory '{path}': {source}")]
    ListDir {
        /// The directory that could not be listed.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The ignore file at the root of the walk could not be compiled.
    #[error("invalid ignore file '{path}': {source}")]
    IgnoreFile {
        /// The ignore file that failed to compile.
        path: String,
        #[source]
        source: ignore::Error,
    },

    /// A glob pattern from --include or --exclude failed to compile.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as given on the command line.
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Helper to create an [`Error::Stat`] with path context.
pub fn stat_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Stat {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper to create an [`Error::Read`] with path context.
pub fn read_error<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Read {
        path: path.as_ref().display().to_string(),
        source,
    }
}
