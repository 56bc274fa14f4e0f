//! Byte decoding with encoding fallback.
//!
//! Indicator exports in the wild arrive as UTF-8 or as a Windows single-byte
//! encoding. UTF-8 is tried first; invalid UTF-8 falls back to Windows-1252,
//! which decodes every byte sequence (it also covers the Latin-1 labels the
//! legacy exports use). UTF-16 files are rejected outright.

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{IngestError, Result};

/// Decodes raw file bytes into text, returning the encoding label used.
pub fn decode_bytes(bytes: &[u8], path: &Path) -> Result<(String, &'static str)> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match std::str::from_utf8(body) {
        Ok(text) => Ok((text.to_string(), "utf-8")),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(body);
            Ok((text.into_owned(), "windows-1252"))
        }
    }
}
