//! Merge of `{codepoint, field, value}` triples into one record per codepoint.

use std::collections::HashMap;

use ucd_model::{Document, Entry, Record};

use crate::entries::{keyed_entries, require_text};
use crate::error::Result;

const TRANSFORM: &str = "merge";

const CODEPOINT: &str = "codepoint";
const FIELD: &str = "field";
const VALUE: &str = "value";

/// Groups triples by codepoint, in order of first appearance.
///
/// Each triple sets `<field>: value` on its codepoint's record. A triple
/// without a value leaves its field unset. Repeated fields keep the last
/// value.
pub fn merge_by_codepoint(document: Document) -> Result<Document> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Entry> = Vec::new();

    for entry in keyed_entries(document.body, TRANSFORM)? {
        let codepoint = require_text(&entry, CODEPOINT, TRANSFORM)?;
        let field = require_text(&entry, FIELD, TRANSFORM)?;

        let slot = match index.get(codepoint) {
            Some(&slot) => slot,
            None => {
                let mut fresh = Entry::new().with(CODEPOINT, codepoint);
                if let Some(line) = entry.line() {
                    fresh.set_line(line);
                }
                merged.push(fresh);
                index.insert(codepoint.to_string(), merged.len() - 1);
                merged.len() - 1
            }
        };

        if let Some(value) = entry.get(VALUE) {
            merged[slot].insert(field, value.clone());
        }
    }

    Ok(Document::records(
        document.name,
        merged.into_iter().map(Record::Keyed).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucd_model::{DocumentBody, FieldValue};

    use crate::error::TransformError;

    fn triple(line: usize, codepoint: &str, field: &str, value: Option<&str>) -> Record {
        let mut entry = Entry::at_line(line)
            .with(CODEPOINT, codepoint)
            .with(FIELD, field);
        if let Some(value) = value {
            entry.insert(VALUE, value);
        }
        Record::Keyed(entry)
    }

    fn merged(records: Vec<Record>) -> Vec<Entry> {
        let output =
            merge_by_codepoint(Document::records("DerivedNormalizationProps", records)).unwrap();
        let DocumentBody::Records(records) = output.body else {
            panic!("expected records");
        };
        records
            .into_iter()
            .filter_map(|record| record.as_entry().cloned())
            .collect()
    }

    #[test]
    fn test_merges_in_first_appearance_order() {
        let entries = merged(vec![
            triple(1, "00A0", "NFKC_QC", Some("N")),
            triple(2, "0340", "NFC_QC", Some("N")),
            triple(3, "00A0", "NFKD_QC", Some("N")),
        ]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text(CODEPOINT), Some("00A0"));
        assert_eq!(entries[0].text("NFKC_QC"), Some("N"));
        assert_eq!(entries[0].text("NFKD_QC"), Some("N"));
        assert_eq!(entries[0].line(), Some(1));
        assert_eq!(entries[1].text(CODEPOINT), Some("0340"));
        assert_eq!(entries[1].len(), 2);
    }

    #[test]
    fn test_missing_value_leaves_field_unset() {
        let entries = merged(vec![
            triple(1, "0041", "Full_Composition_Exclusion", None),
            triple(2, "0041", "NFD_QC", Some("N")),
        ]);

        assert_eq!(entries.len(), 1);
        assert!(!entries[0].contains("Full_Composition_Exclusion"));
        assert_eq!(entries[0].get("NFD_QC"), Some(&FieldValue::text("N")));
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let record = Record::Keyed(Entry::at_line(3).with(CODEPOINT, "0041").with(VALUE, "N"));
        let result = merge_by_codepoint(Document::records("DerivedNormalizationProps", vec![record]));
        assert!(matches!(
            result,
            Err(TransformError::MissingField { line: 3, .. })
        ));
    }
}
