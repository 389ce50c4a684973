//! Schema-driven record building.

use tracing::{debug, warn};
use ucd_model::{Document, Entry, Record};
use ucd_standards::FileSpec;

use crate::coerce::coerce;
use crate::lines::{ParsedLines, SourceLine, parse_lines};

/// Counters reported alongside a parsed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Physical lines in the source file.
    pub total_lines: usize,
    /// Lines that survived comment stripping.
    pub data_lines: usize,
    /// Line that opened a block comment never closed.
    pub unterminated_block: Option<usize>,
}

/// A generically parsed document, before any post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub document: Document,
    pub stats: ParseStats,
}

/// Builds one record per data line.
///
/// With fewer than two schema fields each line yields its trimmed first
/// field as a scalar. Otherwise fields are named by position; empty values
/// and positions beyond the schema are left out. Entries with no fields set
/// are kept.
pub fn build_records(parsed: &ParsedLines<'_>, schema: &[String]) -> Vec<Record> {
    parsed
        .lines
        .iter()
        .map(|line| {
            if schema.len() < 2 {
                let value = line.fields.first().copied().unwrap_or_default().trim();
                Record::Scalar(value.to_string())
            } else {
                Record::Keyed(build_entry(line, schema))
            }
        })
        .collect()
}

fn build_entry(line: &SourceLine<'_>, schema: &[String]) -> Entry {
    let mut entry = Entry::at_line(line.number);
    for (name, raw) in schema.iter().zip(&line.fields) {
        let value = raw.trim();
        if !value.is_empty() {
            entry.insert(name.as_str(), coerce(name, value));
        }
    }
    entry
}

/// Tokenizes and builds records for one file.
pub fn parse_document(spec: &FileSpec, text: &str) -> ParsedDocument {
    let parsed = parse_lines(text, &spec.options);
    let stats = ParseStats {
        total_lines: parsed.total_lines,
        data_lines: parsed.len(),
        unterminated_block: parsed.unterminated_block,
    };
    if let Some(line) = stats.unterminated_block {
        warn!(
            file = %spec.file_name,
            line,
            "block comment is never closed; trailing content dropped"
        );
    }

    let records = build_records(&parsed, &spec.fields);
    debug!(
        file = %spec.file_name,
        total_lines = stats.total_lines,
        records = records.len(),
        "parsed records"
    );

    ParsedDocument {
        document: Document::records(spec.base_name(), records),
        stats,
    }
}
