//! Reading and writing text files.
//!
//! Reads never fail on content: bytes that are not valid UTF-8 are decoded as
//! windows-1252, a single-byte encoding that maps every byte to a character.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{AmeError, Result};

/// Reads `path` as text, falling back to windows-1252 on invalid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| AmeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes).into_owned())
}

/// Decodes raw bytes, preferring UTF-8.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return text;
    }
    tracing::warn!("content is not valid UTF-8, decoding as windows-1252");
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text
}

/// Writes `text` to `path` as UTF-8, replacing any existing file.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| AmeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn utf8_is_decoded_as_is() {
        assert_eq!(decode("héllo — ✓".as_bytes()), "héllo — ✓");
    }

    #[test]
    fn invalid_utf8_falls_back_to_single_byte() {
        // "café" in latin-1: 0xE9 on its own is not valid UTF-8
        let bytes = b"caf\xe9";
        assert_eq!(decode(bytes), "café");
    }

    #[test]
    fn every_byte_value_decodes() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let text = decode(&bytes);
        assert_eq!(text.chars().count(), 256);
    }

    #[test]
    fn utf8_bom_is_kept() {
        let text = decode(b"\xef\xbb\xbf# Title");
        assert!(text.starts_with('\u{feff}'));
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        write_file(&path, "# Notes\n\nπ ≈ 3.14").unwrap();
        assert_eq!(read_file(&path).unwrap(), "# Notes\n\nπ ≈ 3.14");
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_file(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, AmeError::Read { .. }));
    }

    #[test]
    fn write_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no").join("such").join("dir.md");
        let err = write_file(&path, "x").unwrap_err();
        assert!(matches!(err, AmeError::Write { .. }));
    }
}
