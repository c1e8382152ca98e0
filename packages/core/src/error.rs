//! Error taxonomy for tree operations.

/// Recoverable outcomes of tree mutations.
///
/// Every variant leaves the tree untouched and fully invariant-preserving;
/// none of these abort anything. Lookup misses during `search` are reported
/// through `Option` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The final path component does not exist under its parent.
    #[error("no entry at '{path}'")]
    NotFound { path: String },

    /// An explicit insert targeted a path that already fully resolves.
    #[error("entry '{path}' already exists")]
    AlreadyExists { path: String },

    /// An intermediate component of the path does not exist.
    #[error("missing parent directory '{path}'")]
    MissingParent { path: String },

    /// The path decomposed to zero components.
    #[error("path has no components")]
    InvalidPath,
}
