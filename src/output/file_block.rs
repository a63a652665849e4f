// src/output/file_block.rs

use crate::config::RenderOptions;
use crate::dedup::{content_digest, ContentDeduplicator};
use crate::errors::Result;
use crate::output::metadata::{format_mode, format_timestamp, guess_mime_type, lookup_ownership};
use crate::tree::Entry;
use std::io::Write;

/// Writes the record blocks for every file in the subtree, in the same
/// depth-first, children-in-listing-order traversal the tree was built with.
///
/// Directories are only recursed through, never emitted. The deduplicator is
/// consulted and updated per file, so the first file with a given digest
/// emits its full body and later ones a reference.
pub fn write_file_blocks(
    writer: &mut dyn Write,
    entry: &Entry,
    options: &RenderOptions,
    dedup: &mut ContentDeduplicator,
) -> Result<()> {
    if entry.is_dir {
        for child in &entry.children {
            write_file_blocks(writer, child, options, dedup)?;
        }
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "- path: {}", entry.path.display())?;

    if options.show_last_updated {
        writeln!(writer, "- last updated: {}", format_timestamp(entry.modified))?;
    }
    if options.show_mode {
        writeln!(writer, "- mode: {}", format_mode(entry.mode, entry.is_dir))?;
    }
    if options.show_size {
        writeln!(writer, "- size: {} bytes", entry.size)?;
    }
    if options.show_mime {
        writeln!(
            writer,
            "- mime-type: {}",
            guess_mime_type(&entry.path, &entry.content)
        )?;
    }
    if options.show_symlink_targets {
        if let Some(target) = &entry.symlink_target {
            writeln!(writer, "- symlink-target: {}", target.display())?;
        }
    }
    if options.show_ownership {
        if let Some((owner, group)) = lookup_ownership(&entry.path) {
            writeln!(writer, "- owner: {}", owner)?;
            writeln!(writer, "- group: {}", group)?;
        }
    }

    // The digest is only needed for the checksum line and for duplicate
    // detection; with both off, the bytes are never hashed.
    if options.no_dedup {
        if options.show_checksum {
            writeln!(writer, "- sha256: {}", content_digest(&entry.content))?;
        }
        write_content_body(writer, &entry.content)?;
        return Ok(());
    }

    let digest = content_digest(&entry.content);
    if options.show_checksum {
        writeln!(writer, "- sha256: {}", digest)?;
    }

    match dedup.first_seen(&digest) {
        Some(canonical) => {
            writeln!(
                writer,
                "- content: Contents are identical to {}",
                canonical.display()
            )?;
        }
        None => {
            dedup.record(digest, &entry.path);
            write_content_body(writer, &entry.content)?;
        }
    }
    Ok(())
}

fn write_content_body(writer: &mut dyn Write, content: &[u8]) -> Result<()> {
    write!(
        writer,
        "- content:\n```\n{}\n```\n",
        String::from_utf8_lossy(content)
    )?;
    Ok(())
}
