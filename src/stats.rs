// Line statistics: longest line and rounded average length, each in one linear scan

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The selected longest line of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestLine {
    pub line_number: i64,
    pub text: String,
    pub length: usize,
}

impl LongestLine {
    /// Sentinel reported for a book with no records
    pub fn empty() -> Self {
        Self {
            line_number: -1,
            text: String::new(),
            length: 0,
        }
    }
}

/// Select the longest line in a single pass.
///
/// Ties on length go to the record with the larger line number, independent of
/// the order in which records are scanned. An empty slice yields
/// [`LongestLine::empty`].
pub fn find_longest_line(records: &[Record]) -> LongestLine {
    let mut best: Option<(usize, &Record)> = None;

    for record in records {
        let length = record.char_len();
        let replace = match best {
            None => true,
            Some((best_length, best_record)) => {
                length > best_length
                    || (length == best_length && record.line_number > best_record.line_number)
            }
        };
        if replace {
            best = Some((length, record));
        }
    }

    match best {
        Some((length, record)) => LongestLine {
            line_number: record.line_number,
            text: record.text.clone(),
            length,
        },
        None => LongestLine::empty(),
    }
}

/// Mean character length rounded half-up, or 0 for an empty slice.
///
/// Computed exactly as `(2 * sum + count) / (2 * count)`, which equals
/// `floor(sum / count + 0.5)` for non-negative sums.
pub fn average_line_length(records: &[Record]) -> u64 {
    if records.is_empty() {
        return 0;
    }

    let total_chars: u64 = records.iter().map(|r| r.char_len() as u64).sum();
    let count = records.len() as u64;
    (2 * total_chars + count) / (2 * count)
}

/// Both statistics for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    pub longest: LongestLine,
    pub average_length: u64,
    pub record_count: usize,
}

impl BookStats {
    pub fn compute(records: &[Record]) -> Self {
        Self {
            longest: find_longest_line(records),
            average_length: average_line_length(records),
            record_count: records.len(),
        }
    }
}
