//! The hierarchy tree: path insertion, lookup, deletion, and traversal
//! queries.

use crate::error::Error;
use crate::node::Node;
use crate::path::Path;

/// What a fully-resolved path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A leaf node, no children.
    File,
    /// An internal node with at least one child.
    Directory,
}

/// An in-memory filesystem hierarchy.
///
/// The tree owns one unnamed sentinel node as the top-level container. The
/// sentinel is always treated as a directory, never reported by queries, and
/// never removable; every operation walks component chains starting beneath
/// it. Children of every node stay sorted ascending by name, so each level of
/// a walk is a binary search.
///
/// # Example
///
/// ```rust
/// use fstree_core::{path, EntryKind, Tree};
///
/// let mut tree = Tree::new();
/// tree.insert_path(&path!("docs/readme.txt"))?;
///
/// assert_eq!(tree.search(&path!("docs/readme.txt")), Some(EntryKind::File));
/// assert_eq!(tree.search(&path!("docs")), Some(EntryKind::Directory));
/// # Ok::<(), fstree_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Create an empty tree: the sentinel root exists, nothing beneath it.
    pub fn new() -> Self {
        Tree {
            root: Node::new(""),
        }
    }

    /// Insert `path`, creating every missing component along the chain.
    ///
    /// This is the bulk-load entry point: components that already exist are
    /// followed, the rest are created at the point lookup first fails.
    /// Re-inserting a fully-existing path changes nothing and is a success,
    /// so load order never matters.
    pub fn insert_path(&mut self, path: &Path) -> Result<(), Error> {
        if path.is_empty() {
            return Err(Error::InvalidPath);
        }

        let mut current = &mut self.root;
        for component in path.iter() {
            current = current.child_or_insert(component);
        }
        Ok(())
    }

    /// Insert exactly one new leaf as the path's final component.
    ///
    /// Unlike [`Tree::insert_path`], this never creates missing intermediate
    /// directories: the parent chain must already exist
    /// ([`Error::MissingParent`]), and a path that already fully resolves is
    /// reported as [`Error::AlreadyExists`] without touching the tree.
    pub fn insert(&mut self, path: &Path) -> Result<(), Error> {
        let (last, parents) = path.split_last().ok_or(Error::InvalidPath)?;

        if self.search(path).is_some() {
            return Err(Error::AlreadyExists {
                path: path.to_string(),
            });
        }

        let parent = self.resolve_parent_mut(parents)?;
        parent.insert_child(Node::new(last));
        Ok(())
    }

    /// Resolve a path to the kind of entry it names.
    ///
    /// Returns `None` when any component is missing, or when the path has no
    /// components at all: the sentinel root is never a valid search result.
    pub fn search(&self, path: &Path) -> Option<EntryKind> {
        if path.is_empty() {
            return None;
        }

        let mut current = &self.root;
        for component in path.iter() {
            current = current.child(component)?;
        }

        Some(if current.is_leaf() {
            EntryKind::File
        } else {
            EntryKind::Directory
        })
    }

    /// Remove the entry at `path` together with its entire subtree.
    ///
    /// Directories are removed with all descendants unconditionally. The
    /// sentinel root cannot be removed: an empty path is
    /// [`Error::InvalidPath`].
    pub fn remove(&mut self, path: &Path) -> Result<(), Error> {
        let (last, parents) = path.split_last().ok_or(Error::InvalidPath)?;

        let parent = self.resolve_parent_mut(parents)?;
        parent.remove_child(last).ok_or(Error::NotFound {
            path: path.to_string(),
        })?;
        Ok(())
    }

    /// Levels from the top of the hierarchy to its deepest entry.
    ///
    /// An empty tree reports 1: the root container counts as a level even
    /// with nothing beneath it.
    pub fn height(&self) -> usize {
        self.root
            .children()
            .iter()
            .map(Node::height)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Total number of nodes, the sentinel root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Slash-joined path of every file, in depth-first child order.
    pub fn file_paths(&self) -> Vec<String> {
        self.collect_paths(Node::is_leaf)
    }

    /// Slash-joined path of every directory, in depth-first child order.
    ///
    /// The sentinel root is excluded, so an empty tree yields no entries.
    pub fn dir_paths(&self) -> Vec<String> {
        self.collect_paths(|node| !node.is_leaf())
    }

    /// Walk the parent chain, reporting the first missing intermediate.
    fn resolve_parent_mut(&mut self, parents: &[String]) -> Result<&mut Node, Error> {
        let mut current = &mut self.root;
        for (depth, component) in parents.iter().enumerate() {
            current = current.child_mut(component).ok_or_else(|| {
                Error::MissingParent {
                    path: parents[..=depth].join("/"),
                }
            })?;
        }
        Ok(current)
    }

    /// Depth-first walk over the whole tree with an explicit stack; children
    /// are pushed in reverse so pop order matches the sorted child order.
    fn collect_paths(&self, keep: impl Fn(&Node) -> bool) -> Vec<String> {
        let mut paths = Vec::new();
        let mut stack: Vec<(String, &Node)> = self
            .root
            .children()
            .iter()
            .rev()
            .map(|child| (child.name().to_string(), child))
            .collect();

        while let Some((path, node)) = stack.pop() {
            for child in node.children().iter().rev() {
                stack.push((format!("{}/{}", path, child.name()), child));
            }
            if keep(node) {
                paths.push(path);
            }
        }

        paths
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
