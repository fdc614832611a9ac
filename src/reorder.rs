use crate::record::Record;

/// Return the records sorted ascending by line number.
///
/// The sort is stable: records sharing a line number keep their input order.
pub fn sort_by_line_number(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.line_number);
    sorted
}

/// Text of each record, in the order given
pub fn ordered_text(sorted: &[Record]) -> impl Iterator<Item = &str> {
    sorted.iter().map(|r| r.text.as_str())
}
