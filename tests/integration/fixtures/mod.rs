// Scrambled book fixtures with their expected reconstructed outputs

/// Two-line book from the usage example
pub const SIMPLE_SCRAMBLED: &str = "Hello world|2\nAb|1";

/// Expected `TTL_book.txt` for SIMPLE_SCRAMBLED
/// Lengths 11 and 2, mean 6.5 rounds up to 7
pub const SIMPLE_EXPECTED: &str = "TTL
Longest line (2): Hello world
Average length: 7
Ab
Hello world
";

/// Book with blank lines, a `|` inside the text, CRLF endings and a length tie
pub const MESSY_SCRAMBLED: &str = "the cat sat|4\r\n\r\nmat|2\r\n   \r\na|b|c|3\r\nthe dog sat|1\r\n";

/// Expected `MSY_book.txt` for MESSY_SCRAMBLED
/// "the cat sat" (4) and "the dog sat" (1) tie at 11; line 4 wins.
/// Lengths 11 + 3 + 5 + 11 = 30 over 4 records = 7.5 rounds up to 8
pub const MESSY_EXPECTED: &str = "MSY
Longest line (4): the cat sat
Average length: 8
the dog sat
mat
a|b|c
the cat sat
";

/// Opening of a book used to build larger scrambled inputs
pub const BOOK_LINES: &[&str] = &[
    "It was the best of times,",
    "it was the worst of times,",
    "it was the age of wisdom,",
    "it was the age of foolishness,",
    "it was the epoch of belief,",
    "it was the epoch of incredulity,",
    "it was the season of Light,",
    "it was the season of Darkness,",
];

/// Scramble `lines` deterministically, tagging each with its 1-based position.
/// Odd positions come first in reverse, then even positions in reverse.
pub fn scramble(lines: &[&str]) -> String {
    let odd = (0..lines.len()).rev().filter(|i| i % 2 == 1);
    let even = (0..lines.len()).rev().filter(|i| i % 2 == 0);

    odd.chain(even)
        .map(|i| format!("{}|{}\n", lines[i], i + 1))
        .collect()
}
