//! Line classification.
//!
//! Each trimmed line is sorted into exactly one [`LineKind`], checked in
//! priority order: blank, heading, unordered item, ordered item, text.
//! Classification is pure; what a kind does to open blocks is decided by
//! the converter.

use thiserror::Error;

use crate::cursor::Cursor;
use crate::Options;

/// What a single trimmed line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming.
    Blank,
    /// `#` run of length `level`, content starting at byte `content`.
    ///
    /// The level is not clamped to 6.
    Heading { level: usize, content: usize },
    /// `*`/`-` run, content starting at byte `content`.
    UnorderedItem { content: usize },
    /// Digit followed by `.`, content starting at byte `content`.
    OrderedItem { content: usize },
    /// Anything else.
    Text,
}

impl LineKind {
    /// Short name for log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Heading { .. } => "heading",
            Self::UnorderedItem { .. } => "unordered_item",
            Self::OrderedItem { .. } => "ordered_item",
            Self::Text => "text",
        }
    }
}

/// Why a line could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The line ends inside its marker: a lone digit with no second
    /// character to test for `.`, or a `#`, `*`/`-` or digit/`.` run with
    /// nothing after it.
    #[error("line ends before its marker does")]
    MissingLookahead,
}

/// Classify a line that has already been trimmed.
///
/// Marker runs are only used to find where the content starts; a run of
/// `--` or `1.2.` is consumed whole and never means nesting. The content
/// begins one character after the run.
///
/// A line that ends inside its marker (`7`, `###`, `--`, `1.`) fails with
/// [`ClassifyError::MissingLookahead`], or is plain text when
/// `lenient_lookahead` is set.
///
/// # Example
/// ```
/// use blockmark::{classify, LineKind, Options};
///
/// let kind = classify("## Setup", &Options::default()).unwrap();
/// assert_eq!(kind, LineKind::Heading { level: 2, content: 3 });
/// ```
pub fn classify(line: &str, options: &Options) -> Result<LineKind, ClassifyError> {
    let mut cursor = Cursor::new(line);

    let first = match cursor.peek() {
        Some(b) => b,
        None => return Ok(LineKind::Blank),
    };

    match first {
        b'#' => {
            let level = cursor.skip_while(|b| b == b'#');
            if !cursor.skip_char() {
                return truncated(options);
            }
            Ok(LineKind::Heading {
                level,
                content: cursor.offset(),
            })
        }
        b'*' | b'-' => {
            cursor.skip_while(|b| b == b'*' || b == b'-');
            if !cursor.skip_char() {
                return truncated(options);
            }
            Ok(LineKind::UnorderedItem {
                content: cursor.offset(),
            })
        }
        b'0'..=b'9' => match cursor.peek_ahead(1) {
            Some(b'.') => {
                cursor.skip_while(|b| b.is_ascii_digit() || b == b'.');
                if !cursor.skip_char() {
                    return truncated(options);
                }
                Ok(LineKind::OrderedItem {
                    content: cursor.offset(),
                })
            }
            Some(_) => Ok(LineKind::Text),
            None => truncated(options),
        },
        _ => Ok(LineKind::Text),
    }
}

/// Outcome for a line that ends inside its marker.
fn truncated(options: &Options) -> Result<LineKind, ClassifyError> {
    if options.lenient_lookahead {
        Ok(LineKind::Text)
    } else {
        Err(ClassifyError::MissingLookahead)
    }
}
