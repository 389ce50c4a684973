//! Per-file output documents.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::names::NamesListEntry;
use crate::record::Record;
use crate::value::FieldValue;

/// Body of a document, depending on which post-processing ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentBody {
    /// One record per source line (or per merged codepoint).
    Records(Vec<Record>),
    /// Flattened key to value map.
    Mapping(BTreeMap<String, FieldValue>),
    /// Grouped names-list entries.
    NamesList(Vec<NamesListEntry>),
}

impl DocumentBody {
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Mapping(mapping) => mapping.len(),
            Self::NamesList(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Records(_) => "records",
            Self::Mapping(_) => "mapping",
            Self::NamesList(_) => "names list",
        }
    }
}

/// Output of one input file, serialized as `{ "<name>": <body> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Base file name without the `.txt` extension.
    pub name: String,
    pub body: DocumentBody,
}

impl Document {
    pub fn new(name: impl Into<String>, body: DocumentBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn records(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self::new(name, DocumentBody::Records(records))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.body)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Entry;

    #[test]
    fn test_document_is_keyed_by_name() {
        let document = Document::records(
            "Blocks",
            vec![Record::Keyed(Entry::new().with("name", "Basic Latin"))],
        );
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"Blocks":[{"name":"Basic Latin"}]}"#);
    }

    #[test]
    fn test_mapping_body() {
        let mut mapping = BTreeMap::new();
        mapping.insert("0028".to_string(), FieldValue::text("0029"));
        let document = Document::new("BidiMirroring", DocumentBody::Mapping(mapping));
        assert_eq!(document.body.len(), 1);
        assert_eq!(document.body.kind(), "mapping");
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"BidiMirroring":{"0028":"0029"}}"#);
    }
}
