//! # fstree-bench
//!
//! Experiment harness for the fstree hierarchy: generates synthetic
//! directory fixtures on disk, times load/search/insert/remove over them,
//! and exports the measurements.
//!
//! The harness is a consumer of `fstree-core`'s public operations only; the
//! tree knows nothing about being measured.
//!
//! ## Usage
//!
//! ```no_run
//! use fstree_bench::{report, ExperimentConfig};
//!
//! let config = ExperimentConfig {
//!     directories: 500,
//!     files: 2_000,
//!     repetitions: 10_000,
//!     seed: 7,
//! };
//! let result = fstree_bench::run("/tmp/fstree-bench".as_ref(), &config)?;
//! report::print_summary(&[result]);
//! # Ok::<(), fstree_bench::BenchError>(())
//! ```

mod error;
pub mod experiment;
pub mod fixture;
pub mod report;

pub use error::BenchError;
pub use experiment::{run, ExperimentConfig, ExperimentResult};
