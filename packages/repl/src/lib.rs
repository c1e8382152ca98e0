//! # fstree-repl
//!
//! The interactive surface over the fstree hierarchy.
//!
//! This crate provides a line-oriented shell for exercising the tree's
//! operations by hand and a non-interactive `bench` mode that drives the
//! experiment harness.
//!
//! ## Usage
//!
//! ```bash
//! # Start with an empty tree
//! fstree
//!
//! # Load a directory at startup
//! fstree --dir ~/projects/demo
//!
//! # Inside the shell:
//! > mkpath docs/readme.txt
//! > search docs
//! > rm docs/readme.txt
//! > stats
//!
//! # Run the experiment harness
//! fstree bench --dirs 500 --files 2000 --csv results.csv
//! ```

pub mod bench_cmd;
pub mod commands;
pub mod completer;
pub mod context;
pub mod repl;

mod error;
mod log_level;

pub use bench_cmd::BenchArgs;
pub use context::ShellContext;
pub use error::ShellError;
pub use log_level::LogLevel;
pub use repl::run;
