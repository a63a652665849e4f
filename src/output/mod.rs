// src/output/mod.rs

//! Produces the flat textual representation of a built tree.
//!
//! Output order: aggregate counters, the tree diagram, then one record block
//! per file. Both passes use the same depth-first, children-in-listing-order
//! traversal the tree was built with, so output is deterministic given a
//! deterministic filesystem listing order.

use crate::config::RenderOptions;
use crate::dedup::ContentDeduplicator;
use crate::errors::Result;
use crate::tree::Entry;
use log::debug;
use std::io::Write;

pub mod file_block;
pub mod metadata;
pub mod tree_diagram;

/// Renders the full document for `root` into `writer`.
///
/// A fresh [`ContentDeduplicator`] is created per call, so rendering the same
/// tree twice yields byte-identical output.
pub fn render(root: &Entry, options: &RenderOptions, writer: &mut dyn Write) -> Result<()> {
    debug!("Rendering tree rooted at {:?}", root.path);

    writeln!(writer, "- Total files: {}", root.total_files())?;
    writeln!(writer, "- Total size: {} bytes", root.total_size())?;
    writeln!(writer, "- Dir tree:")?;
    tree_diagram::write_tree_diagram(writer, root)?;
    writeln!(writer)?;

    let mut dedup = ContentDeduplicator::new();
    file_block::write_file_blocks(writer, root, options, &mut dedup)?;

    writer.flush()?;
    Ok(())
}

/// Convenience wrapper that renders into a `String`.
pub fn render_to_string(root: &Entry, options: &RenderOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render(root, options, &mut buffer)?;
    // The renderer emits file bodies lossily, so the buffer is valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
