//! Two-column flattening into a key to value map.

use std::collections::BTreeMap;

use tracing::warn;
use ucd_model::{Document, DocumentBody, FieldValue};

use crate::entries::{keyed_entries, line_of, require_text};
use crate::error::Result;

const TRANSFORM: &str = "flatten";

/// Collapses records into one map from the `key` column to the `value`
/// column.
///
/// Later records overwrite earlier ones with the same key. A record without
/// a value maps its key to an empty string. Already flattened documents are
/// returned unchanged.
pub fn flatten_pairs(document: Document, key: &str, value: &str) -> Result<Document> {
    if matches!(document.body, DocumentBody::Mapping(_)) {
        return Ok(document);
    }

    let mut mapping = BTreeMap::new();
    for entry in keyed_entries(document.body, TRANSFORM)? {
        let map_key = require_text(&entry, key, TRANSFORM)?;
        let map_value = entry
            .get(value)
            .cloned()
            .unwrap_or_else(|| FieldValue::text(""));
        if let Some(previous) = mapping.insert(map_key.to_string(), map_value) {
            warn!(
                file = %document.name,
                line = line_of(&entry),
                key = map_key,
                ?previous,
                "duplicate key; keeping the later value"
            );
        }
    }

    Ok(Document::new(document.name, DocumentBody::Mapping(mapping)))
}
