use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::record::Record;
use crate::reorder::ordered_text;
use crate::stats::BookStats;

/// The three metadata lines that precede the book text
pub fn header_lines(code: &str, stats: &BookStats) -> [String; 3] {
    [
        code.to_string(),
        format!(
            "Longest line ({}): {}",
            stats.longest.line_number, stats.longest.text
        ),
        format!("Average length: {}", stats.average_length),
    ]
}

/// Render the full output file contents in memory
pub fn render_book(code: &str, stats: &BookStats, sorted: &[Record]) -> String {
    let mut out = String::new();
    for line in header_lines(code, stats) {
        let _ = writeln!(out, "{line}");
    }
    for text in ordered_text(sorted) {
        let _ = writeln!(out, "{text}");
    }
    out
}

/// Write the reconstructed book, creating or overwriting `output_path`.
///
/// `sorted` must already be in line-number order.
pub async fn write_book_file(
    output_path: &Path,
    code: &str,
    stats: &BookStats,
    sorted: &[Record],
) -> Result<u64> {
    let file = tokio::fs::File::create(output_path)
        .await
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut bytes_written = 0u64;

    let header = header_lines(code, stats);
    for line in header.iter().map(String::as_str).chain(ordered_text(sorted)) {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        bytes_written += line.len() as u64 + 1;
    }

    writer.flush().await?;
    debug!("Wrote {} bytes to {}", bytes_written, output_path.display());
    Ok(bytes_written)
}
