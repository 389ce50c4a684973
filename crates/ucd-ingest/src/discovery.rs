//! File discovery for UCD directories.

use std::path::{Path, PathBuf};

use ucd_standards::{FieldTable, FileSpec};

use crate::error::{IngestError, Result};

/// A source file matched to its field table entry.
#[derive(Debug, Clone)]
pub struct DiscoveredFile<'a> {
    pub path: PathBuf,
    pub spec: &'a FileSpec,
}

/// Result of matching a directory against the field table.
#[derive(Debug, Clone, Default)]
pub struct Discovery<'a> {
    /// Configured files present in the directory, in table order.
    pub files: Vec<DiscoveredFile<'a>>,
    /// Configured files absent from the directory.
    pub missing: Vec<&'a str>,
    /// `.txt` files present but not configured.
    pub unconfigured: Vec<PathBuf>,
}

/// Lists all `.txt` files in a directory.
///
/// Returns files sorted by filename.
pub fn list_txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        if is_txt {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Matches the `.txt` files of `dir` against the field table by file name.
pub fn discover_files<'a>(dir: &Path, table: &'a FieldTable) -> Result<Discovery<'a>> {
    let present = list_txt_files(dir)?;
    let mut discovery = Discovery::default();

    for spec in table.iter() {
        let found = present.iter().find(|path| {
            path.file_name().and_then(|name| name.to_str()) == Some(spec.file_name.as_str())
        });
        match found {
            Some(path) => discovery.files.push(DiscoveredFile {
                path: path.clone(),
                spec,
            }),
            None => discovery.missing.push(&spec.file_name),
        }
    }

    discovery.unconfigured = present
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_none_or(|name| table.get(name).is_none())
        })
        .collect();

    Ok(discovery)
}
