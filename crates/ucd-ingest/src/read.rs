//! Reading UCD source files as UTF-8 text.

use std::path::Path;

use crate::error::{IngestError, Result};

const UTF8_BOM: &str = "\u{feff}";

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Rejects byte order marks of encodings other than UTF-8.
fn check_bom(path: &Path, bytes: &[u8]) -> Result<()> {
    // UTF-16 LE BOM
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    // UTF-16 BE BOM
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

/// Reads a UCD file into a string, stripping a UTF-8 BOM if present.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    check_bom(path, &bytes)?;

    let text = String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}
