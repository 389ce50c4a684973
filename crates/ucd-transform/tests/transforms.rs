//! End-to-end transform tests: source text through record building and the
//! configured post-processing.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use ucd_ingest::parse_document;
use ucd_model::{Document, DocumentBody, Entry, FieldValue, Record};
use ucd_standards::{FieldTable, load_default_field_table};
use ucd_transform::{apply_transform, flatten_pairs};

fn table() -> FieldTable {
    load_default_field_table().expect("load shipped field table")
}

fn convert(table: &FieldTable, file_name: &str, text: &str) -> Document {
    let spec = table.require(file_name).expect("configured file");
    let parsed = parse_document(spec, text);
    apply_transform(spec, parsed.document).expect("transform succeeds")
}

fn json(document: &Document) -> serde_json::Value {
    serde_json::to_value(document).expect("serialize document")
}

#[test]
fn property_value_aliases_end_to_end() {
    let text = "\
# PropertyValueAliases-15.0.0.txt

AHex; N ; No ; F ; False
ccc;   0; NR ; Not_Reordered
gc ; C ; Other # Cc | Cf | Cn | Co | Cs
";
    let document = convert(&table(), "PropertyValueAliases.txt", text);

    insta::assert_json_snapshot!(json(&document), @r#"
    {
      "PropertyValueAliases": [
        {
          "aliasLongName": "False",
          "aliasShortName": "F",
          "longName": "No",
          "property": "AHex",
          "shortName": "N"
        },
        {
          "class": "0",
          "longName": "Not_Reordered",
          "property": "ccc",
          "shortName": "NR"
        },
        {
          "longName": "Other",
          "property": "gc",
          "shortName": "C"
        }
      ]
    }
    "#);
}

#[test]
fn bidi_test_sections_end_to_end() {
    let text = "\
# BidiTest-15.0.0.txt
@Levels:\tx
@Reorder:\t
L; 7
@Levels:\t1
R; 7
";
    let document = convert(&table(), "BidiTest.txt", text);

    insta::assert_json_snapshot!(json(&document), @r#"
    {
      "BidiTest": [
        {
          "bitset": "7",
          "input": "L",
          "levels": "x",
          "reorder": ""
        },
        {
          "bitset": "7",
          "input": "R",
          "levels": "1",
          "reorder": ""
        }
      ]
    }
    "#);
}

#[test]
fn names_list_end_to_end() {
    let text = "\
; charset=UTF-8
@@@\tThe Unicode Standard 15.0
@@\t0000\tC0 Controls and Basic Latin\t007F
0000\t<control>
\t= NULL
0020\tSPACE
\t* sometimes considered a control code
\tx (no-break space - 00A0)
00A0\tNO-BREAK SPACE
\t# <noBreak> 0020
";
    let document = convert(&table(), "NamesList.txt", text);

    insta::assert_json_snapshot!(json(&document), @r#"
    {
      "NamesList": [
        {
          "line": 2,
          "text": "@@@\tThe Unicode Standard 15.0"
        },
        {
          "line": 3,
          "text": "@@\t0000\tC0 Controls and Basic Latin\t007F"
        },
        {
          "alias": [
            "NULL"
          ],
          "codepoint": "0000",
          "name": "<control>"
        },
        {
          "codepoint": "0020",
          "comment": [
            "sometimes considered a control code"
          ],
          "crossReference": [
            "(no-break space - 00A0)"
          ],
          "name": "SPACE"
        },
        {
          "codepoint": "00A0",
          "compatibility": [
            [
              "<noBreak>",
              "0020"
            ]
          ],
          "name": "NO-BREAK SPACE"
        }
      ]
    }
    "#);
}

#[test]
fn bidi_mirroring_flattens_to_mapping() {
    let text = "\
# BidiMirroring-15.0.0.txt
0028; 0029 # LEFT PARENTHESIS
0029; 0028 # RIGHT PARENTHESIS
003C; 003E # [BEST FIT] LESS-THAN SIGN
";
    let document = convert(&table(), "BidiMirroring.txt", text);

    insta::assert_json_snapshot!(json(&document), @r#"
    {
      "BidiMirroring": {
        "0028": "0029",
        "0029": "0028",
        "003C": "003E"
      }
    }
    "#);
}

fn keyed_record_count(table: &FieldTable, file_name: &str, text: &str) -> usize {
    let spec = table.require(file_name).expect("configured file");
    let DocumentBody::Records(records) = parse_document(spec, text).document.body else {
        panic!("expected records");
    };
    records
        .iter()
        .filter_map(Record::as_entry)
        .filter(|entry| !entry.is_empty())
        .count()
}

#[test]
fn flattened_files_have_no_duplicate_keys() {
    let mirroring = "\
# BidiMirroring-15.0.0.txt
# Date: 2022-05-03, 18:47:00 GMT [KW, RP]
#
# Bidi_Mirroring_Glyph Property

0028; 0029 # LEFT PARENTHESIS
0029; 0028 # RIGHT PARENTHESIS
003C; 003E # LESS-THAN SIGN
003E; 003C # GREATER-THAN SIGN
005B; 005D # LEFT SQUARE BRACKET
005D; 005B # RIGHT SQUARE BRACKET
007B; 007D # LEFT CURLY BRACKET
007D; 007B # RIGHT CURLY BRACKET
00AB; 00BB # LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
00BB; 00AB # RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
2039; 203A # SINGLE LEFT-POINTING ANGLE QUOTATION MARK
203A; 2039 # SINGLE RIGHT-POINTING ANGLE QUOTATION MARK

# The following characters have no appropriate mirroring character.
# 2140; DOUBLE-STRUCK N-ARY SUMMATION
";
    let jamo = "\
# Jamo-15.0.0.txt
#
# Unicode Character Database

1100; G     # HANGUL CHOSEONG KIYEOK
1101; GG    # HANGUL CHOSEONG SSANGKIYEOK
1102; N     # HANGUL CHOSEONG NIEUN
110B;       # HANGUL CHOSEONG IEUNG
1161; A     # HANGUL JUNGSEONG A
1162; AE    # HANGUL JUNGSEONG AE
11A8; G     # HANGUL JONGSEONG KIYEOK
11A9; GG    # HANGUL JONGSEONG SSANGKIYEOK

# EOF
";
    let table = table();
    for (file_name, text, expected) in [
        ("BidiMirroring.txt", mirroring, 12),
        ("Jamo.txt", jamo, 8),
    ] {
        let records = keyed_record_count(&table, file_name, text);
        let document = convert(&table, file_name, text);
        let DocumentBody::Mapping(mapping) = &document.body else {
            panic!("{file_name}: expected mapping");
        };

        assert_eq!(records, expected, "{file_name}");
        assert_eq!(mapping.len(), records, "{file_name}");
    }
}

#[test]
fn merged_codepoints_are_unique() {
    let text = "\
00A0          ; NFKD_QC; N # Zs       NO-BREAK SPACE
00A0          ; NFKC_QC; N # Zs       NO-BREAK SPACE
0340..0341    ; NFC_QC; N  # Mn   [2] COMBINING GRAVE TONE MARK..COMBINING ACUTE TONE MARK
0958          ; Full_Composition_Exclusion # Lo  DEVANAGARI LETTER QA
0958          ; NFD_QC; N  # Lo       DEVANAGARI LETTER QA
";
    let document = convert(&table(), "DerivedNormalizationProps.txt", text);
    let DocumentBody::Records(records) = &document.body else {
        panic!("expected records");
    };

    let codepoints: Vec<&str> = records
        .iter()
        .filter_map(Record::as_entry)
        .filter_map(|entry| entry.text("codepoint"))
        .collect();
    let unique: HashSet<&str> = codepoints.iter().copied().collect();
    assert_eq!(codepoints, ["00A0", "0340..0341", "0958"]);
    assert_eq!(unique.len(), codepoints.len());

    let qa = records[2].as_entry().expect("keyed record");
    assert!(!qa.contains("Full_Composition_Exclusion"));
    assert_eq!(qa.text("NFD_QC"), Some("N"));
}

#[test]
fn untransformed_file_keeps_blank_lines_as_empty_entries() {
    let text = "\
# Blocks-15.0.0.txt
0000..007F; Basic Latin

0080..00FF; Latin-1 Supplement
";
    let document = convert(&table(), "Blocks.txt", text);

    insta::assert_json_snapshot!(json(&document), @r#"
    {
      "Blocks": [
        {
          "name": "Basic Latin",
          "range": [
            "0000",
            "007F"
          ]
        },
        {},
        {
          "name": "Latin-1 Supplement",
          "range": [
            "0080",
            "00FF"
          ]
        }
      ]
    }
    "#);
}

fn pair_document(pairs: &[(String, String)]) -> Document {
    let records = pairs
        .iter()
        .enumerate()
        .map(|(index, (key, value))| {
            Record::Keyed(
                Entry::at_line(index + 1)
                    .with("codepoint", key.as_str())
                    .with("mirror", value.as_str()),
            )
        })
        .collect();
    Document::records("BidiMirroring", records)
}

proptest! {
    #[test]
    fn flatten_keeps_every_key_with_its_last_value(
        pairs in prop::collection::vec(("[0-9A-F]{4}", "[0-9A-F]{4}"), 0..24),
    ) {
        let output = flatten_pairs(pair_document(&pairs), "codepoint", "mirror").unwrap();
        let DocumentBody::Mapping(mapping) = &output.body else {
            panic!("expected mapping");
        };

        let expected: BTreeMap<&str, &str> = pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        prop_assert_eq!(mapping.len(), expected.len());
        for (key, value) in expected {
            prop_assert_eq!(mapping.get(key), Some(&FieldValue::text(value)));
        }

        let again = flatten_pairs(output.clone(), "codepoint", "mirror").unwrap();
        prop_assert_eq!(again, output);
    }
}
