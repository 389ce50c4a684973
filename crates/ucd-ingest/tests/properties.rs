//! Property tests for line parsing, coercion and record building.

use proptest::prelude::*;
use ucd_ingest::{build_records, coerce, parse_lines};
use ucd_model::{FieldValue, ParseOptions, Record};

/// Field text free of delimiters, comment markers and line breaks.
fn field_text() -> impl Strategy<Value = String> {
    "[ A-Za-z0-9_.<>-]{0,12}"
}

fn schema(len: usize) -> Vec<String> {
    (0..len).map(|index| format!("field{index}")).collect()
}

proptest! {
    #[test]
    fn set_fields_match_non_empty_positions(fields in prop::collection::vec(field_text(), 2..8)) {
        let line = fields.join(";");
        let parsed = parse_lines(&line, &ParseOptions::default());
        let names = schema(fields.len());
        let records = build_records(&parsed, &names);

        prop_assert_eq!(records.len(), 1);
        let Record::Keyed(entry) = &records[0] else {
            panic!("expected keyed record");
        };
        for (name, raw) in names.iter().zip(&fields) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                prop_assert!(!entry.contains(name));
            } else {
                prop_assert_eq!(entry.text(name), Some(trimmed));
            }
        }
        let expected = fields.iter().filter(|raw| !raw.trim().is_empty()).count();
        prop_assert_eq!(entry.len(), expected);
    }

    #[test]
    fn range_fields_split_on_separator(
        lower in "[0-9A-F]{4,6}",
        upper in "[0-9A-F]{4,6}",
        name in "(range|Range|codepointRange|RANGE)",
    ) {
        let value = format!("{lower}..{upper}");
        prop_assert_eq!(coerce(&name, &value), FieldValue::Range(vec![lower.clone(), upper]));
        prop_assert_eq!(coerce(&name, &lower), FieldValue::Range(vec![lower.clone()]));
    }

    #[test]
    fn list_fields_split_on_whitespace(
        tokens in prop::collection::vec("[0-9A-F]{4}", 1..6),
        separator in "[ \t]{1,3}",
        name in "(mappingSequence|scriptList|LIST|sequence)",
    ) {
        let value = tokens.join(&separator);
        prop_assert_eq!(coerce(&name, &value), FieldValue::List(tokens));
    }

    #[test]
    fn block_comment_content_never_surfaces(
        header in prop::collection::vec("#( [ -~]{0,20})?", 0..4),
        before in prop::collection::vec("[0-9A-F]{4};[a-z]{1,6}", 0..4),
        inside in prop::collection::vec("[ -~]{0,20}", 0..6),
        after in prop::collection::vec("[0-9A-F]{4};[a-z]{1,6}", 0..4),
    ) {
        let inside: Vec<String> = inside
            .into_iter()
            .filter(|line| line.trim() != "###")
            .collect();
        let mut lines = header.clone();
        lines.extend(before.iter().cloned());
        lines.push("###".to_string());
        lines.extend(inside.iter().cloned());
        lines.push("###".to_string());
        lines.push("#".to_string());
        lines.extend(after.iter().cloned());
        let text = lines.join("\n");

        let options = ParseOptions::default()
            .with_multiline_comments(true)
            .with_block_comment_marker("###");
        let parsed = parse_lines(&text, &options);

        let block_start = header.len() + before.len() + 1;
        let block_end = block_start + inside.len() + 1;
        prop_assert_eq!(parsed.len(), before.len() + after.len());
        prop_assert!(parsed
            .lines
            .iter()
            .all(|line| line.number < block_start || line.number > block_end));
        prop_assert_eq!(parsed.unterminated_block, None);
    }
}
