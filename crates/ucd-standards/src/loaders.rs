#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StandardsError};
use crate::table::{FieldTable, RawTable};

/// File name of the field table inside the standards directory.
pub const FIELD_TABLE_FILE: &str = "fields.json";

const STANDARDS_ENV_VAR: &str = "UCD_STANDARDS_DIR";

pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

pub fn default_field_table_path() -> PathBuf {
    default_standards_root().join(FIELD_TABLE_FILE)
}

pub fn load_default_field_table() -> Result<FieldTable> {
    load_field_table(&default_field_table_path())
}

/// Reads and validates a field table from a JSON file.
pub fn load_field_table(path: &Path) -> Result<FieldTable> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let raw: RawTable = serde_json::from_str(&contents).map_err(|e| StandardsError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    let table = raw.into_table()?;
    debug!(path = %path.display(), files = table.len(), "loaded field table");
    Ok(table)
}

/// Parses a field table from JSON text.
pub fn parse_field_table(json: &str) -> Result<FieldTable> {
    let raw: RawTable = serde_json::from_str(json).map_err(|e| StandardsError::Json {
        path: PathBuf::from("<inline>"),
        source: e,
    })?;
    raw.into_table()
}
