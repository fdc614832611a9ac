// End-to-end processing of one scrambled book: read, aggregate, reorder, write

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::naming;
use crate::reader::{BookReader, ReaderConfig};
use crate::reorder::sort_by_line_number;
use crate::stats::BookStats;
use crate::writer::write_book_file;

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub reader: ReaderConfig,
}

/// Summary of one processed book
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input file as given
    pub input: String,
    /// Output file written
    pub output: String,
    /// Code derived from the input file name
    pub code: String,
    /// Number of parsed records
    pub records: u64,
    /// Blank lines skipped by the reader
    pub blank_lines: u64,
    pub longest_line_number: i64,
    pub longest_line_length: u64,
    pub average_length: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Wall time for the whole pipeline in milliseconds
    pub processing_time_ms: u64,
}

impl RunStats {
    /// Write the summary as pretty JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", path.display()))?;
        Ok(())
    }
}

/// Reconstruct the book in `input_path` and write `<code>_book.txt` beside it.
///
/// Every line is parsed before the output file is opened, so a malformed input
/// never leaves partial output behind.
pub async fn process_book(input_path: &Path, config: &PipelineConfig) -> Result<RunStats> {
    let start_time = std::time::Instant::now();

    let reader = BookReader::new(config.reader.clone());
    let (records, read_stats) = reader.read_records(input_path).await?;

    if records.is_empty() {
        warn!("No records found in {}", input_path.display());
    }

    let stats = BookStats::compute(&records);
    let sorted = sort_by_line_number(&records);

    let code = naming::derive_code(input_path);
    let output_path = naming::generate_output_path(input_path);
    if naming::output_exists(input_path) {
        info!("Overwriting existing output: {}", output_path.display());
    }

    let bytes_written = write_book_file(&output_path, &code, &stats, &sorted).await?;

    let run_stats = RunStats {
        input: input_path.display().to_string(),
        output: output_path.display().to_string(),
        code,
        records: read_stats.records,
        blank_lines: read_stats.blank_lines,
        longest_line_number: stats.longest.line_number,
        longest_line_length: stats.longest.length as u64,
        average_length: stats.average_length,
        bytes_read: read_stats.bytes_read,
        bytes_written,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        code = %run_stats.code,
        records = run_stats.records,
        longest_line = run_stats.longest_line_number,
        average_length = run_stats.average_length,
        "Wrote {}",
        run_stats.output
    );

    Ok(run_stats)
}
