use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fstree_repl::{bench_cmd, BenchArgs, LogLevel};

/// fstree - interactive shell and benchmarks for a filesystem hierarchy tree
#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to load into the tree at startup
    #[arg(long, short)]
    dir: Option<PathBuf>,

    /// Logging verbosity
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the experiment harness non-interactively
    Bench(BenchArgs),
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);

    let outcome = match &args.command {
        Some(Command::Bench(bench_args)) => bench_cmd::run(bench_args),
        None => fstree_repl::run(args.dir.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing(log_level: LogLevel) {
    if let Some(level) = log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}
