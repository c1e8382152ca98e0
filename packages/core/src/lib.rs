//! fstree core: the in-memory hierarchy tree.
//!
//! This layer is the data structure and nothing else:
//! - [`Path`]: decomposed slash/backslash-delimited path components
//! - [`Node`]: a named entry owning its children, kept sorted by name
//! - [`Tree`]: path insertion, lookup, deletion, and traversal queries
//!
//! The tree never touches the real filesystem; populating it from a
//! directory walk, timing it, or driving it interactively are the concerns
//! of the packages layered on top.
//!
//! # Example
//!
//! ```rust
//! use fstree_core::{path, EntryKind, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert_path(&path!("src/main.rs"))?;
//! tree.insert_path(&path!("src/lib.rs"))?;
//!
//! assert_eq!(tree.search(&path!("src")), Some(EntryKind::Directory));
//! assert_eq!(tree.file_paths(), ["src/lib.rs", "src/main.rs"]);
//! # Ok::<(), fstree_core::Error>(())
//! ```

mod error;
mod node;
mod path;
mod tree;

pub use error::Error;
pub use node::Node;
pub use path::Path;
pub use tree::{EntryKind, Tree};
