// src/filtering/binary.rs

use content_inspector::ContentType;
use std::{fs::File, io::Read, path::Path, str};

// Bytes read from the head of a file for content type detection.
const SNIFF_BUFFER_SIZE: usize = 1024;

/// Checks whether a byte buffer looks like binary (non-text) data.
///
/// Uses `content_inspector` for the heuristic check and additionally requires
/// UTF-8 validity when the inspection is ambiguous, so invalid byte sequences
/// are classified as binary rather than mangled into the output.
///
/// # Examples
/// ```
/// use flatten::filtering::is_binary_buffer;
///
/// assert!(!is_binary_buffer(b"plain UTF-8 text"));
/// assert!(is_binary_buffer(b"null byte \0 inside"));
/// assert!(is_binary_buffer(&[0x48, 0x65, 0x80, 0x6f])); // invalid UTF-8
/// ```
pub fn is_binary_buffer(buffer: &[u8]) -> bool {
    match content_inspector::inspect(buffer) {
        ContentType::UTF_8_BOM => false,
        ContentType::UTF_8 => str::from_utf8(buffer).is_err(),
        ContentType::BINARY => true,
        // Unknown inspection results are treated conservatively as binary.
        _ => true,
    }
}

/// Checks whether a file on disk looks binary by sniffing its head.
///
/// Reads the first 1024 bytes only; the tree builder calls this before
/// committing to reading the whole file into memory.
///
/// # Errors
/// Propagates the underlying I/O error (file not found, permission denied).
pub fn is_binary(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0; SNIFF_BUFFER_SIZE];
    let bytes_read = file.read(&mut buffer)?;
    Ok(is_binary_buffer(&buffer[..bytes_read]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_buffer_plain_text_is_not_binary() {
        assert!(!is_binary_buffer(b"fn main() {}\n"));
    }

    #[test]
    fn test_buffer_utf8_bom_is_not_binary() {
        assert!(!is_binary_buffer(&[0xEF, 0xBB, 0xBF, b'h', b'i']));
    }

    #[test]
    fn test_buffer_empty_is_not_binary() {
        assert!(!is_binary_buffer(b""));
    }

    #[test]
    fn test_buffer_null_byte_is_binary() {
        assert!(is_binary_buffer(b"data \0 with null"));
    }

    #[test]
    fn test_file_png_magic_is_binary() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("image.png");
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])?;
        assert!(is_binary(&path)?);
        Ok(())
    }

    #[test]
    fn test_file_text_is_not_binary() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("notes.txt");
        fs::write(&path, "just some notes")?;
        assert!(!is_binary(&path)?);
        Ok(())
    }

    #[test]
    fn test_file_missing_is_error() {
        assert!(is_binary(Path::new("no_such_file_for_binary_check")).is_err());
    }
}
