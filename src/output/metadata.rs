// src/output/metadata.rs

//! Formatting helpers for the optional per-file metadata lines.
//!
//! These are thin lookups over OS primitives; the renderer decides which of
//! them to emit based on the configured toggles.

use crate::filtering::is_binary_buffer;
use chrono::{DateTime, Local, SecondsFormat};
use std::path::Path;
use std::time::SystemTime;

/// Formats a modification time as RFC 3339 in the local timezone, with
/// seconds precision.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats platform mode bits as a symbolic permission string, e.g.
/// `-rw-r--r--` or `drwxr-xr-x`.
pub fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Guesses a MIME type from the file extension, falling back to a content
/// sniff when the extension is unknown.
pub fn guess_mime_type(path: &Path, content: &[u8]) -> String {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return mime.to_string();
    }
    if is_binary_buffer(content) {
        "application/octet-stream".to_string()
    } else {
        "text/plain; charset=utf-8".to_string()
    }
}

/// Looks up the owning user and group names for a path.
///
/// Best-effort: returns `None` when the path cannot be stat'ed or a name
/// cannot be resolved, and always `None` off unix.
#[cfg(unix)]
pub fn lookup_ownership(path: &Path) -> Option<(String, String)> {
    use std::os::unix::fs::MetadataExt;

    let metadata = std::fs::metadata(path).ok()?;
    let owner = uzers::get_user_by_uid(metadata.uid())?
        .name()
        .to_string_lossy()
        .into_owned();
    let group = uzers::get_group_by_gid(metadata.gid())?
        .name()
        .to_string_lossy()
        .into_owned();
    Some((owner, group))
}

#[cfg(not(unix))]
pub fn lookup_ownership(_path: &Path) -> Option<(String, String)> {
    None
}
