//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure for the script generator:
//! three positional paths matching the historical invocation plus the
//! batch-size knob.

use clap::Parser;
use std::path::PathBuf;

/// Maximum batch size accepted by the CLI.
const MAX_BATCH_SIZE: usize = 4096;

/// Default number of targets per bazel invocation.
pub const DEFAULT_BATCH_SIZE: usize = 256;

fn parse_batch_size(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("{s} is not a valid number"))?;
    if (1..=MAX_BATCH_SIZE).contains(&value) {
        Ok(value)
    } else {
        Err(format!("batch size must be between 1 and {MAX_BATCH_SIZE}"))
    }
}

/// Generate a shell script that scans third-party jars in batched bazel builds.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited list of Bazel targets to scan.
    #[arg(value_name = "TARGETS_FILE")]
    pub input_file: PathBuf,

    /// Path of the shell script to write; use `-` for stdout.
    #[arg(value_name = "OUTPUT_SCRIPT")]
    pub output_script: PathBuf,

    /// Path to the generated build-tool configuration repository.
    #[arg(value_name = "GEN_CONFIG")]
    pub gen_config: PathBuf,

    /// Number of targets handed to each bazel invocation.
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = parse_batch_size
    )]
    pub batch_size: usize,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,
}
