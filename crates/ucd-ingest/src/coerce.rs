//! Field value coercion driven by field names.

use ucd_model::FieldValue;

/// Shape a field's values take, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    Range,
    List,
}

/// Substring rules, checked in order. The first match wins.
const SHAPE_RULES: &[(&str, ValueShape)] = &[
    ("range", ValueShape::Range),
    ("sequence", ValueShape::List),
    ("list", ValueShape::List),
];

const RANGE_SEPARATOR: &str = "..";

/// Classifies a field name (case-insensitive substring match).
pub fn value_shape(field_name: &str) -> ValueShape {
    let name = field_name.to_lowercase();
    SHAPE_RULES
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map_or(ValueShape::Text, |(_, shape)| *shape)
}

/// Converts a trimmed raw value into the shape its field name calls for.
pub fn coerce(field_name: &str, value: &str) -> FieldValue {
    match value_shape(field_name) {
        ValueShape::Text => FieldValue::Text(value.to_string()),
        ValueShape::Range => FieldValue::Range(
            value
                .split(RANGE_SEPARATOR)
                .map(str::to_string)
                .collect(),
        ),
        ValueShape::List => FieldValue::List(
            value
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        ),
    }
}
