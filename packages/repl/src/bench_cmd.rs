//! Non-interactive benchmark runner.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use fstree_bench::{fixture, report, ExperimentConfig};

use crate::error::ShellError;

/// Arguments for the `bench` subcommand.
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Base directory for the generated fixture
    #[arg(long, default_value = "fstree-bench-fixture")]
    base: PathBuf,

    /// Number of directories in the fixture
    #[arg(long, default_value_t = 2_000)]
    dirs: usize,

    /// Number of files in the fixture
    #[arg(long, default_value_t = 10_000)]
    files: usize,

    /// Timing loop repetitions per operation
    #[arg(long, default_value_t = 100_000)]
    repetitions: usize,

    /// Seed for the fixture layout and path sampling
    #[arg(long, default_value_t = 0xf57)]
    seed: u64,

    /// Write results as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Keep the generated fixture on disk afterwards
    #[arg(long)]
    keep: bool,
}

/// Run one experiment, print its summary, and export where asked.
pub fn run(args: &BenchArgs) -> Result<(), ShellError> {
    let config = ExperimentConfig {
        directories: args.dirs,
        files: args.files,
        repetitions: args.repetitions,
        seed: args.seed,
    };

    let result = fstree_bench::run(&args.base, &config)?;
    let results = [result];

    report::print_summary(&results);
    if let Some(out) = &args.csv {
        report::write_csv(&results, out)?;
        info!("results written to {}", out.display());
    }
    if let Some(out) = &args.json {
        report::write_json(&results, out)?;
        info!("results written to {}", out.display());
    }

    if args.keep {
        info!("fixture kept at {}", args.base.display());
    } else {
        fixture::cleanup(&args.base)?;
    }
    Ok(())
}
