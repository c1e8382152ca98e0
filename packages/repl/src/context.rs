//! Shell state: the tree instance every command operates on.

use std::path::{Path, PathBuf};

use fstree_core::Tree;
use fstree_loader::LoadError;

/// One tree plus where it came from, threaded through the command loop.
pub struct ShellContext {
    tree: Tree,
    source: Option<PathBuf>,
}

impl ShellContext {
    /// Start with an empty tree.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            source: None,
        }
    }

    /// Replace the tree with a fresh load of `dir`.
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), LoadError> {
        self.tree = fstree_loader::load(dir)?;
        self.source = Some(dir.to_path_buf());
        Ok(())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The directory the tree was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn new_context_is_empty_and_unsourced() {
        let ctx = ShellContext::new();
        assert_eq!(ctx.tree().node_count(), 1);
        assert!(ctx.source().is_none());
    }

    #[test]
    fn load_dir_replaces_tree_and_records_source() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let mut ctx = ShellContext::new();
        ctx.tree_mut()
            .insert_path(&fstree_core::path!("stale"))
            .unwrap();

        ctx.load_dir(dir.path()).unwrap();
        assert_eq!(ctx.tree().file_paths(), ["a.txt"]);
        assert_eq!(ctx.source(), Some(dir.path()));
    }

    #[test]
    fn load_dir_failure_surfaces() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("missing");

        let mut ctx = ShellContext::new();
        assert!(ctx.load_dir(&gone).is_err());
    }
}
