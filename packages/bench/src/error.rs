//! Error type for the experiment harness.

/// Failures while generating fixtures, measuring, or exporting results.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("fixture I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load the fixture tree: {0}")]
    Load(#[from] fstree_loader::LoadError),

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("the fixture produced no {kind} paths to sample")]
    EmptyFixture { kind: &'static str },
}
