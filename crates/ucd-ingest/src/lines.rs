//! Line tokenizer: comment stripping and delimiter splitting.
//!
//! Output is the ordered list of data lines, each split into raw
//! (untrimmed) field strings, with its 1-based line number. Trimming is the
//! record builder's job.

use ucd_model::ParseOptions;

/// One data line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the source file.
    pub number: usize,
    /// The full line as read, before comment stripping.
    pub raw: &'a str,
    /// Raw field strings split on the delimiter.
    pub fields: Vec<&'a str>,
}

/// Result of tokenizing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLines<'a> {
    pub lines: Vec<SourceLine<'a>>,
    /// Number of physical lines scanned.
    pub total_lines: usize,
    /// Line that opened a block comment still open at end of file.
    pub unterminated_block: Option<usize>,
}

impl ParsedLines<'_> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits `text` into data lines according to `options`.
pub fn parse_lines<'a>(text: &'a str, options: &ParseOptions) -> ParsedLines<'a> {
    let comment = options.comment_marker();
    let block = options.block_marker();

    let mut parsed = ParsedLines::default();
    let mut block_start: Option<usize> = None;

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        parsed.total_lines = number;

        if let Some(marker) = block
            && raw.trim() == marker
        {
            block_start = match block_start {
                Some(_) => None,
                None => Some(number),
            };
            continue;
        }
        if block_start.is_some() {
            continue;
        }
        if let Some(marker) = comment
            && raw.trim_start().starts_with(marker)
        {
            continue;
        }

        let content = match comment {
            Some(marker) if options.trailing_comments => {
                raw.find(marker).map_or(raw, |end| &raw[..end])
            }
            _ => raw,
        };
        if options.skip_blank_lines && content.trim().is_empty() {
            continue;
        }

        parsed.lines.push(SourceLine {
            number,
            raw,
            fields: content.split(options.delimiter).collect(),
        });
    }

    parsed.unterminated_block = block_start;
    parsed
}
