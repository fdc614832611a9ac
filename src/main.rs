use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use unscramble::pipeline::{self, PipelineConfig};
use unscramble::reader::ReaderConfig;

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "Reconstructs a scrambled book file of `text|line_number` lines")]
#[command(version)]
struct Args {
    /// Scrambled book file, e.g. TTL.txt
    input: PathBuf,

    /// Also write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,

    /// Suppress the summary on stdout
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the summary
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting unscramble");
    info!(?args, "Parsed CLI arguments");

    if !args.input.exists() {
        anyhow::bail!("File not found: {}", args.input.display());
    }

    if !args.input.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input.display());
    }

    let config = PipelineConfig {
        reader: ReaderConfig {
            buffer_size: args.buffer_size.max(1),
        },
    };

    let run_stats = pipeline::process_book(&args.input, &config).await?;

    if let Some(ref stats_path) = args.stats_out {
        run_stats.save(stats_path).await?;
        info!("Stats written to {}", stats_path.display());
    }

    if !args.quiet {
        println!("unscramble v{} - {}", env!("CARGO_PKG_VERSION"), run_stats.code);
        println!("  Records: {}", run_stats.records);
        println!("  Longest line: {} ({} chars)", run_stats.longest_line_number, run_stats.longest_line_length);
        println!("  Average length: {}", run_stats.average_length);
        println!("  Output: {}", run_stats.output);
    }

    Ok(())
}
