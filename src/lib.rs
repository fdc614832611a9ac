pub mod record;
pub mod reader;
pub mod stats;
pub mod reorder;
pub mod naming;
pub mod writer;
pub mod pipeline;

// Re-export main types for convenient access
pub use record::{parse_line, ParseError, Record};
pub use stats::{average_line_length, find_longest_line, BookStats, LongestLine};
pub use reorder::sort_by_line_number;

// Re-export naming and pipeline entry points
pub use naming::{derive_code, generate_output_path, output_exists};
pub use pipeline::{process_book, PipelineConfig, RunStats};
