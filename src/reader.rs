use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::record::{self, Record};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
        }
    }
}

/// Statistics for one read of a scrambled book file
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub blank_lines: u64,
    pub records: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads a scrambled book file fully into memory and parses every non-blank line
pub struct BookReader {
    config: ReaderConfig,
}

impl BookReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read and parse all records in input-file order.
    ///
    /// The first malformed line aborts the read; the error names the file and
    /// the 1-based line number.
    pub async fn read_records<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<Record>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut records = Vec::new();
        let mut line_count = 0u64;
        let mut blank_count = 0u64;
        let mut byte_count = 0u64;

        while let Some(line) = lines.next_line().await.with_context(|| {
            format!(
                "UTF-8 decoding error in {} at line {}",
                path.display(),
                line_count + 1
            )
        })? {
            line_count += 1;
            byte_count += line.len() as u64 + 1; // +1 for newline

            if record::is_blank(&line) {
                blank_count += 1;
                continue;
            }

            let parsed = record::parse_line(&line).with_context(|| {
                format!("Malformed line {} in {}", line_count, path.display())
            })?;
            records.push(parsed);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            blank_lines: blank_count,
            records: records.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines ({} records, {} blank), {} bytes in {}ms",
            path.display(),
            line_count,
            stats.records,
            blank_count,
            byte_count,
            stats.duration_ms
        );

        Ok((records, stats))
    }
}

/// Convenience function for reading a single book with default configuration
pub async fn read_book_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<Record>> {
    let reader = BookReader::new(ReaderConfig::default());
    let (records, _stats) = reader.read_records(file_path).await?;
    Ok(records)
}
