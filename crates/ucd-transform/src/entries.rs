//! Shared access helpers for keyed post-processors.

use ucd_model::{DocumentBody, Entry, FieldValue, Record};

use crate::error::{Result, TransformError};

/// Source line of an entry, or 0 when it was built without one.
pub(crate) fn line_of(entry: &Entry) -> usize {
    entry.line().unwrap_or_default()
}

/// Empty entry carrying the source line of `entry`.
pub(crate) fn entry_from(entry: &Entry) -> Entry {
    entry.line().map_or_else(Entry::new, Entry::at_line)
}

/// Unwraps the keyed entries of a generic document, skipping blank ones.
pub(crate) fn keyed_entries(body: DocumentBody, transform: &'static str) -> Result<Vec<Entry>> {
    let records = match body {
        DocumentBody::Records(records) => records,
        other => {
            return Err(TransformError::UnexpectedShape {
                transform,
                expected: "records",
                found: other.kind(),
            });
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        match record {
            Record::Keyed(entry) if entry.is_empty() => {}
            Record::Keyed(entry) => entries.push(entry),
            Record::Scalar(_) => {
                return Err(TransformError::UnexpectedShape {
                    transform,
                    expected: "keyed records",
                    found: "scalar record",
                });
            }
        }
    }
    Ok(entries)
}

/// Reads a field that must be present and hold text.
pub(crate) fn require_text<'a>(
    entry: &'a Entry,
    field: &str,
    transform: &'static str,
) -> Result<&'a str> {
    match entry.get(field) {
        Some(FieldValue::Text(value)) => Ok(value),
        Some(FieldValue::Range(_) | FieldValue::List(_)) => Err(TransformError::NonTextField {
            transform,
            field: field.to_string(),
            line: line_of(entry),
        }),
        None => Err(TransformError::MissingField {
            transform,
            field: field.to_string(),
            line: line_of(entry),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucd_model::Document;

    #[test]
    fn test_keyed_entries_skip_blank() {
        let body = DocumentBody::Records(vec![
            Record::Keyed(Entry::at_line(1).with("a", "x")),
            Record::Keyed(Entry::at_line(2)),
        ]);
        let entries = keyed_entries(body, "test").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_keyed_entries_reject_scalar() {
        let body = DocumentBody::Records(vec![Record::Scalar("0041".to_string())]);
        assert!(matches!(
            keyed_entries(body, "test"),
            Err(TransformError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_keyed_entries_reject_mapping() {
        let document = Document::new("Jamo", DocumentBody::Mapping(Default::default()));
        assert!(matches!(
            keyed_entries(document.body, "test"),
            Err(TransformError::UnexpectedShape { found: "mapping", .. })
        ));
    }

    #[test]
    fn test_require_text_errors() {
        let entry = Entry::at_line(7).with(
            "range",
            FieldValue::Range(vec!["0000".to_string()]),
        );
        assert!(matches!(
            require_text(&entry, "codepoint", "test"),
            Err(TransformError::MissingField { line: 7, .. })
        ));
        assert!(matches!(
            require_text(&entry, "range", "test"),
            Err(TransformError::NonTextField { .. })
        ));
    }
}
