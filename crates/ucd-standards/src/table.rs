#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ucd_model::{ParseOptions, TransformKind};

use crate::error::{Result, StandardsError};

/// Schema, parse options and post-processing of one UCD file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSpec {
    pub file_name: String,
    pub fields: Vec<String>,
    pub options: ParseOptions,
    pub transform: Option<TransformKind>,
}

impl FileSpec {
    pub fn new(file_name: impl Into<String>, fields: &[&str], options: ParseOptions) -> Self {
        Self {
            file_name: file_name.into(),
            fields: fields.iter().map(|field| (*field).to_string()).collect(),
            options,
            transform: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.transform = Some(transform);
        self
    }

    /// File name without the `.txt` extension; the output document key.
    pub fn base_name(&self) -> &str {
        self.file_name
            .strip_suffix(".txt")
            .unwrap_or(&self.file_name)
    }
}

/// The static table of UCD files, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    files: BTreeMap<String, FileSpec>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spec: FileSpec) {
        self.files.insert(spec.file_name.clone(), spec);
    }

    pub fn get(&self, file_name: &str) -> Option<&FileSpec> {
        self.files.get(file_name)
    }

    pub fn require(&self, file_name: &str) -> Result<&FileSpec> {
        self.get(file_name)
            .ok_or_else(|| StandardsError::UnknownFile {
                name: file_name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileSpec> {
        self.files.values()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// On-disk shape of the field table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawTable {
    #[serde(default)]
    defaults: ParseOptions,
    files: BTreeMap<String, RawFileEntry>,
}

/// One file entry; unset options inherit from the table defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFileEntry {
    fields: Vec<String>,
    delimiter: Option<char>,
    comment_marker: Option<String>,
    multiline_comments: Option<bool>,
    block_comment_marker: Option<String>,
    trailing_comments: Option<bool>,
    skip_blank_lines: Option<bool>,
    transform: Option<TransformKind>,
}

impl RawFileEntry {
    fn resolve_options(&self, defaults: &ParseOptions) -> ParseOptions {
        let mut options = defaults.clone();
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(marker) = &self.comment_marker {
            options.comment_marker = Some(marker.clone());
        }
        if let Some(enable) = self.multiline_comments {
            options.multiline_comments = enable;
        }
        if let Some(marker) = &self.block_comment_marker {
            options.block_comment_marker = Some(marker.clone());
        }
        if let Some(enable) = self.trailing_comments {
            options.trailing_comments = enable;
        }
        if let Some(enable) = self.skip_blank_lines {
            options.skip_blank_lines = enable;
        }
        options
    }
}

impl RawTable {
    pub(crate) fn into_table(self) -> Result<FieldTable> {
        let mut table = FieldTable::new();
        for (file_name, entry) in self.files {
            validate_entry(&file_name, &entry)?;
            let options = entry.resolve_options(&self.defaults);
            validate_options(&file_name, &options)?;
            table.insert(FileSpec {
                file_name,
                options,
                transform: entry.transform,
                fields: entry.fields,
            });
        }
        Ok(table)
    }
}

fn validate_entry(file_name: &str, entry: &RawFileEntry) -> Result<()> {
    if file_name.trim().is_empty() {
        return Err(StandardsError::invalid("empty file name"));
    }
    if !file_name.ends_with(".txt") {
        return Err(StandardsError::invalid(format!(
            "{file_name}: file names must end in .txt"
        )));
    }
    if entry.fields.is_empty() {
        return Err(StandardsError::invalid(format!(
            "{file_name}: field list is empty"
        )));
    }
    if entry.fields.iter().any(|field| field.trim().is_empty()) {
        return Err(StandardsError::invalid(format!(
            "{file_name}: field names must not be empty"
        )));
    }
    if let Some(TransformKind::Flatten { key, value }) = &entry.transform {
        for column in [key, value] {
            if !entry.fields.contains(column) {
                return Err(StandardsError::invalid(format!(
                    "{file_name}: flatten column '{column}' is not a field"
                )));
            }
        }
    }
    Ok(())
}

fn validate_options(file_name: &str, options: &ParseOptions) -> Result<()> {
    if options.delimiter == '\n' || options.delimiter == '\r' {
        return Err(StandardsError::invalid(format!(
            "{file_name}: delimiter must not be a line break"
        )));
    }
    if options.multiline_comments && options.block_marker().is_none() {
        return Err(StandardsError::invalid(format!(
            "{file_name}: multiline comments need a distinct block comment marker"
        )));
    }
    Ok(())
}
