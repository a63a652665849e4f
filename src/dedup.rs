// src/dedup.rs

//! Exact-duplicate detection by content hash.
//!
//! The index maps a SHA-256 digest to the first path observed with it, lives
//! only for the duration of one render pass, and is never persisted. Digest
//! collisions are treated as identity; at this digest width an unintended
//! collision is not a realistic concern for this tool.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Computes the hex SHA-256 digest of raw file bytes.
///
/// # Examples
/// ```
/// use flatten::dedup::content_digest;
///
/// let digest = content_digest(b"hello");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, content_digest(b"hello"));
/// assert_ne!(digest, content_digest(b"Hello"));
/// ```
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// First-seen-wins index of content digests.
///
/// The first file (in rendering traversal order) with a given digest is the
/// canonical copy whose content is emitted in full; later files with the same
/// digest emit a reference to the canonical path instead.
#[derive(Debug, Default)]
pub struct ContentDeduplicator {
    seen: HashMap<String, PathBuf>,
}

impl ContentDeduplicator {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical path previously recorded for `digest`, if any.
    pub fn first_seen(&self, digest: &str) -> Option<&Path> {
        self.seen.get(digest).map(PathBuf::as_path)
    }

    /// Records `path` as the canonical copy for `digest`. A digest that is
    /// already present keeps its original path.
    pub fn record(&mut self, digest: String, path: &Path) {
        self.seen.entry(digest).or_insert_with(|| path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_path_wins() {
        let mut dedup = ContentDeduplicator::new();
        let digest = content_digest(b"hello");

        assert!(dedup.first_seen(&digest).is_none());
        dedup.record(digest.clone(), Path::new("a.txt"));
        assert_eq!(dedup.first_seen(&digest), Some(Path::new("a.txt")));

        // A second record for the same digest does not displace the first.
        dedup.record(digest.clone(), Path::new("sub/b.txt"));
        assert_eq!(dedup.first_seen(&digest), Some(Path::new("a.txt")));
    }

    #[test]
    fn test_distinct_content_distinct_entries() {
        let mut dedup = ContentDeduplicator::new();
        dedup.record(content_digest(b"one"), Path::new("one.txt"));
        dedup.record(content_digest(b"two"), Path::new("two.txt"));
        assert_eq!(
            dedup.first_seen(&content_digest(b"two")),
            Some(Path::new("two.txt"))
        );
    }

    #[test]
    fn test_known_sha256_vector() {
        // SHA-256 of the empty string.
        assert_eq!(
            content_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
