mod batch;
mod decode;
mod encode;
mod error;
mod matting;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use decode::FileDecoder;
use encode::PngEncoder;
use matting::{FlatColorMatting, DEFAULT_TOLERANCE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input directory (scanned for .png/.jpg/.jpeg) or a single image file
    input: PathBuf,

    /// Output directory for the matted PNGs
    /// Defaults to a `processed` directory inside the input directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum per-channel color difference for a pixel to count as background
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    tolerance: i32,

    /// Number of worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn output_dir(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let base = if self.input.is_dir() {
            self.input.as_path()
        } else {
            self.input.parent().unwrap_or_else(|| Path::new("."))
        };
        base.join("processed")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let output_dir = args.output_dir();

    tracing::info!("clearbg starting");
    tracing::info!("Input: {}", args.input.display());
    tracing::info!("Output: {}", output_dir.display());
    tracing::info!("Tolerance: {}", args.tolerance);

    let summary = batch::run_batch(
        &FileDecoder,
        &FlatColorMatting,
        &PngEncoder,
        &args.input,
        &output_dir,
        args.tolerance,
        args.jobs,
    )?;

    tracing::info!(
        "Batch finished: {} processed, {} failed",
        summary.succeeded,
        summary.failed
    );

    Ok(())
}
