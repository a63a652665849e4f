// src/output/tree_diagram.rs

use crate::errors::Result;
use crate::tree::Entry;
use std::io::Write;

/// Writes the ASCII directory tree using box-drawing connectors.
///
/// The root itself is never printed as a line; its children start at the
/// left margin. Each directory's children use `├── ` for all but the last
/// and `└── ` for the last, and nested prefixes accumulate `│   ` or four
/// spaces accordingly.
pub fn write_tree_diagram(writer: &mut dyn Write, root: &Entry) -> Result<()> {
    let last = root.children.len().saturating_sub(1);
    for (i, child) in root.children.iter().enumerate() {
        write_node(writer, child, "", i == last)?;
    }
    Ok(())
}

fn write_node(writer: &mut dyn Write, entry: &Entry, prefix: &str, is_last: bool) -> Result<()> {
    let marker = if is_last { "└── " } else { "├── " };
    writeln!(writer, "{}{}{}", prefix, marker, entry.name())?;

    if entry.is_dir {
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let last = entry.children.len().saturating_sub(1);
        for (i, child) in entry.children.iter().enumerate() {
            write_node(writer, child, &child_prefix, i == last)?;
        }
    }
    Ok(())
}
