//! Shell-level error type.

use std::path::PathBuf;

/// Failures that end a shell or bench invocation.
///
/// Per-command mistakes (a missing path, an entry that already exists) are
/// reported inline by the command loop and never become a `ShellError`.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        source: fstree_loader::LoadError,
    },

    #[error(transparent)]
    Bench(#[from] fstree_bench::BenchError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
