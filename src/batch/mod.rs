use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::ProcessError;
use crate::matting::MattingEngine;

/// Extensions accepted by the directory scan, lowercase.
const INPUT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Outcome counts for one batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Run the full batch: enumerate inputs, matte each file on a bounded
/// worker pool, and write PNG outputs into `output_dir`.
///
/// Per-file failures are logged and counted; they never stop the batch.
pub fn run_batch<D, M, E>(
    decoder: &D,
    engine: &M,
    encoder: &E,
    input: &Path,
    output_dir: &Path,
    tolerance: i32,
    jobs: usize,
) -> Result<BatchSummary>
where
    D: Decoder + Sync,
    M: MattingEngine + Sync,
    E: Encoder + Sync,
{
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let inputs = collect_inputs(input)?;
    if inputs.is_empty() {
        tracing::warn!("No input images found in {}", input.display());
        return Ok(BatchSummary::default());
    }

    tracing::debug!("Found {} input file(s)", inputs.len());

    // jobs == 0 lets rayon size the pool to the core count
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build worker pool")?;

    let outcomes: Vec<bool> = pool.install(|| {
        inputs
            .par_iter()
            .map(|path| {
                let dest = output_path(path, output_dir);
                match process_file(decoder, engine, encoder, path, &dest, tolerance) {
                    Ok(()) => {
                        tracing::info!("Processed {} -> {}", path.display(), dest.display());
                        true
                    }
                    Err(err) => {
                        tracing::error!("Skipping {}: {}", path.display(), err);
                        false
                    }
                }
            })
            .collect()
    });

    let succeeded = outcomes.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        succeeded,
        failed: outcomes.len() - succeeded,
    })
}

/// Decode, matte, and encode a single file. Any error is terminal for
/// this file only.
fn process_file<D, M, E>(
    decoder: &D,
    engine: &M,
    encoder: &E,
    input: &Path,
    output: &Path,
    tolerance: i32,
) -> Result<(), ProcessError>
where
    D: Decoder,
    M: MattingEngine,
    E: Encoder,
{
    let grid = decoder.decode(input)?;
    let matted = engine.matte(&grid, tolerance)?;
    encoder.encode(&matted, output)
}

/// Enumerate input files: a directory is scanned (non-recursively) for
/// known raster extensions; a plain file is taken as-is.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = fs::read_dir(input)
        .with_context(|| format!("Failed to read input directory {}", input.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_input_extension(&path) {
            files.push(path);
        }
    }

    // Sorted so batch order and logs are reproducible
    files.sort();
    Ok(files)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            INPUT_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Outputs always land as `<output_dir>/<stem>.png`.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    output_dir.join(stem).with_extension("png")
}
