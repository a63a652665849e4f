// src/tree.rs

//! Builds the in-memory ownership tree of visible filesystem entries.
//!
//! The walk is single-threaded, synchronous, depth-first recursion with
//! children visited in name order per directory. Every file's content is read
//! eagerly, so the whole visited tree is resident in memory before any output
//! is produced. That bounds usable input size to available memory, an
//! acceptable trade-off for the tool's intended scope (source trees).

use crate::errors::{read_error, stat_error, Error, Result};
use crate::filtering::VisibilityFilter;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One node of the visible tree. Directories own their children; content
/// bytes are owned by file entries.
///
/// Invariants: a directory entry's `content` is always empty, and a file
/// entry's `children` is always empty.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The filesystem path as walked (root path joined with child names).
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// File size in bytes; 0 for directories.
    pub size: u64,
    /// Platform file-mode bits (0 where the platform has none).
    pub mode: u32,
    /// Last modification time.
    pub modified: SystemTime,
    /// The link target, when the entry itself is a symbolic link.
    pub symlink_target: Option<PathBuf>,
    /// Raw content bytes; empty for directories.
    pub content: Vec<u8>,
    /// Child entries in per-directory name order; empty for files.
    pub children: Vec<Entry>,
}

impl Entry {
    /// The entry's base name for display, falling back to the full path for
    /// roots like `.` or `/`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Recursive tally of non-directory entries in this subtree.
    pub fn total_files(&self) -> usize {
        if !self.is_dir {
            return 1;
        }
        self.children.iter().map(Entry::total_files).sum()
    }

    /// Recursive sum of file sizes in this subtree; directories contribute 0.
    pub fn total_size(&self) -> u64 {
        if !self.is_dir {
            return self.size;
        }
        self.children.iter().map(Entry::total_size).sum()
    }
}

/// Builds the tree of visible entries rooted at `root`.
///
/// The root entry always represents the input directory itself, even if its
/// own name would otherwise be filtered; the filter applies only to
/// descendants. Excluded subtrees are never descended into.
///
/// # Errors
/// Any stat, read, or directory-listing failure aborts the whole build with
/// the offending path — partial output would misrepresent the tree.
pub fn build_tree(root: &Path, filter: &VisibilityFilter) -> Result<Entry> {
    let entry = build_entry(root, filter, true)?;
    // The root is never filtered, so build_entry always yields it.
    entry.ok_or_else(|| {
        stat_error(
            std::io::Error::new(std::io::ErrorKind::NotFound, "root entry vanished"),
            root,
        )
    })
}

fn build_entry(path: &Path, filter: &VisibilityFilter, is_root: bool) -> Result<Option<Entry>> {
    let metadata = fs::metadata(path).map_err(|e| stat_error(e, path))?;
    let is_dir = metadata.is_dir();

    if !is_root && !filter.include(path, is_dir) {
        return Ok(None);
    }

    let mut entry = Entry {
        path: path.to_path_buf(),
        is_dir,
        size: if is_dir { 0 } else { metadata.len() },
        mode: mode_bits(&metadata),
        modified: metadata.modified().map_err(|e| stat_error(e, path))?,
        symlink_target: read_symlink_target(path),
        content: Vec::new(),
        children: Vec::new(),
    };

    if !is_dir {
        // Symbolic links are followed here: the link is flattened as a
        // regular file holding its target's bytes.
        entry.content = fs::read(path).map_err(|e| read_error(e, path))?;
        return Ok(Some(entry));
    }

    let listing = fs::read_dir(path).map_err(|source| Error::ListDir {
        path: path.display().to_string(),
        source,
    })?;
    // Listing order is sorted by file name per directory, which keeps the
    // serialization (and therefore the dedup canonical-copy choice)
    // deterministic across filesystems.
    let mut items = Vec::new();
    for item in listing {
        let item = item.map_err(|source| Error::ListDir {
            path: path.display().to_string(),
            source,
        })?;
        items.push(item.path());
    }
    items.sort();
    for child_path in items {
        if let Some(child) = build_entry(&child_path, filter, false)? {
            entry.children.push(child);
        }
    }
    debug!(
        "Built directory {:?} with {} visible children",
        path,
        entry.children.len()
    );
    Ok(Some(entry))
}

#[cfg(unix)]
fn mode_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(_metadata: &fs::Metadata) -> u32 {
    0
}

fn read_symlink_target(path: &Path) -> Option<PathBuf> {
    let link_meta = fs::symlink_metadata(path).ok()?;
    if link_meta.file_type().is_symlink() {
        fs::read_link(path).ok()
    } else {
        None
    }
}
