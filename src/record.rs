// One scrambled line is `text|line_number`; the number follows the LAST separator,
// the text may itself contain `|`

use thiserror::Error;

/// Separator between the text and its true line number
pub const SEPARATOR: char = '|';

/// One line of the book, tagged with its position in the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line_number: i64,
    pub text: String,
}

impl Record {
    pub fn new(line_number: i64, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }

    /// Length in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '|' separator in line: {0:?}")]
    MissingSeparator(String),
    #[error("invalid line number {number:?} in line: {line:?}")]
    InvalidLineNumber { line: String, number: String },
}

/// Parse a raw `text|line_number` line into a [`Record`].
///
/// A single trailing `\n` is removed first. The suffix after the last `|` is
/// trimmed before integer parsing, which tolerates a `\r` left by CRLF files.
/// The text part is kept verbatim.
pub fn parse_line(raw_line: &str) -> Result<Record, ParseError> {
    let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);

    let (text, number) = line
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;

    let line_number = number
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidLineNumber {
            line: line.to_string(),
            number: number.to_string(),
        })?;

    Ok(Record::new(line_number, text))
}

/// Lines the reader skips instead of parsing
pub fn is_blank(raw_line: &str) -> bool {
    raw_line.trim().is_empty()
}
