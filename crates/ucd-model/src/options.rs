//! Per-file parse options and post-processing selection.

use serde::{Deserialize, Serialize};

/// Comment and delimiter conventions of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Field separator.
    pub delimiter: char,
    /// Lines starting with this prefix (after leading whitespace) are dropped.
    pub comment_marker: Option<String>,
    /// Recognize block comments opened and closed by a marker line.
    pub multiline_comments: bool,
    /// Marker line for block comments. Must differ from `comment_marker`.
    pub block_comment_marker: Option<String>,
    /// Cut everything from the comment marker to end of line.
    pub trailing_comments: bool,
    /// Drop lines that are empty after comment stripping.
    pub skip_blank_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            comment_marker: Some("#".to_string()),
            multiline_comments: false,
            block_comment_marker: None,
            trailing_comments: false,
            skip_blank_lines: false,
        }
    }
}

impl ParseOptions {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: Option<&str>) -> Self {
        self.comment_marker = marker.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_multiline_comments(mut self, enable: bool) -> Self {
        self.multiline_comments = enable;
        self
    }

    #[must_use]
    pub fn with_block_comment_marker(mut self, marker: &str) -> Self {
        self.block_comment_marker = Some(marker.to_string());
        self
    }

    #[must_use]
    pub fn with_trailing_comments(mut self, enable: bool) -> Self {
        self.trailing_comments = enable;
        self
    }

    #[must_use]
    pub fn with_skip_blank_lines(mut self, enable: bool) -> Self {
        self.skip_blank_lines = enable;
        self
    }

    /// Marker line that toggles a block comment, when block comments are on.
    ///
    /// A marker equal to the single-line comment marker is ignored: bare
    /// comment lines appear in every UCD header.
    pub fn block_marker(&self) -> Option<&str> {
        if !self.multiline_comments {
            return None;
        }
        self.block_comment_marker
            .as_deref()
            .filter(|marker| !marker.is_empty())
            .filter(|marker| Some(*marker) != self.comment_marker())
    }

    pub fn comment_marker(&self) -> Option<&str> {
        self.comment_marker
            .as_deref()
            .filter(|marker| !marker.is_empty())
    }
}

/// Post-processing applied to a file after generic parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransformKind {
    /// Disambiguate property value alias tuples by arity.
    Aliases,
    /// Propagate `@Levels:` / `@Reorder:` directives onto data lines.
    Sections,
    /// Collapse two columns into a key to value map.
    Flatten { key: String, value: String },
    /// Group names-list continuation lines under their codepoint.
    NamesList,
    /// Merge `{codepoint, field, value}` rows per codepoint.
    Merge,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aliases => "aliases",
            Self::Sections => "sections",
            Self::Flatten { .. } => "flatten",
            Self::NamesList => "namesList",
            Self::Merge => "merge",
        }
    }
}
