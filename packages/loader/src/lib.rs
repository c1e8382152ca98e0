//! Bulk-load an fstree hierarchy from a real directory.
//!
//! The walk happens once: every entry found under the root is converted to a
//! root-relative path string and fed to [`Tree::insert_path`]. After that the
//! tree lives on its own: there is no re-sync with the filesystem, and
//! symbolic links are not followed.
//!
//! Entry order is whatever the OS hands back; the tree keeps its children
//! sorted regardless, so two walks of the same hierarchy always produce the
//! same tree.

use std::{fs, io, path};

use tracing::{debug, warn};

use fstree_core::{Path, Tree};

/// Errors raised while populating a tree from disk.
///
/// Only the root being unusable is fatal. Unreadable entries below it are
/// skipped with a warning so one bad subdirectory does not abandon the rest
/// of the walk.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read the root directory {path}: {source}")]
    RootUnreadable {
        path: path::PathBuf,
        source: io::Error,
    },
    #[error("root path {path} is not a directory")]
    NotADirectory { path: path::PathBuf },
}

/// Walk `root` recursively and build a tree of everything beneath it.
///
/// The root itself becomes the tree's unnamed sentinel; each discovered file
/// or directory is inserted at its path relative to `root`.
pub fn load(root: &path::Path) -> Result<Tree, LoadError> {
    let attr = fs::metadata(root).map_err(|source| LoadError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    if !attr.is_dir() {
        return Err(LoadError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut tree = Tree::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(source) if dir == root => {
                return Err(LoadError::RootUnreadable {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(source) => {
                warn!("skipping unreadable directory {}: {}", dir.display(), source);
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    warn!("skipping entry in {}: {}", dir.display(), source);
                    continue;
                }
            };

            insert_relative(&mut tree, root, &entry.path());

            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => pending.push(entry.path()),
                Ok(_) => {}
                Err(source) => {
                    warn!(
                        "skipping children of {}: {}",
                        entry.path().display(),
                        source
                    );
                }
            }
        }
    }

    debug!(
        "loaded {} nodes from {}",
        tree.node_count(),
        root.display()
    );
    Ok(tree)
}

/// Insert one discovered entry at its path relative to the walk root.
fn insert_relative(tree: &mut Tree, root: &path::Path, entry: &path::Path) {
    let relative = match entry.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => {
            warn!("entry {} escapes the walk root", entry.display());
            return;
        }
    };

    let decomposed = Path::parse(&relative.to_string_lossy());
    if let Err(err) = tree.insert_path(&decomposed) {
        warn!("failed to insert {}: {}", relative.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(path: &path::Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn load_builds_relative_hierarchy() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/util")).unwrap();
        touch(&dir.path().join("src/main.rs"));
        touch(&dir.path().join("src/util/helper.rs"));
        touch(&dir.path().join("readme.md"));

        let tree = load(dir.path()).unwrap();

        assert_eq!(
            tree.file_paths(),
            ["readme.md", "src/main.rs", "src/util/helper.rs"]
        );
        assert_eq!(tree.dir_paths(), ["src", "src/util"]);
        // sentinel + 2 dirs + 3 files
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn load_of_empty_directory_is_empty_tree() {
        let dir = tempdir().unwrap();
        let tree = load(dir.path()).unwrap();

        assert_eq!(tree.node_count(), 1);
        assert!(tree.file_paths().is_empty());
    }

    #[test]
    fn load_missing_root_errors() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("never_created");

        assert!(matches!(
            load(&gone),
            Err(LoadError::RootUnreadable { .. })
        ));
    }

    #[test]
    fn load_file_root_errors() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        touch(&file);

        assert!(matches!(load(&file), Err(LoadError::NotADirectory { .. })));
    }

    #[test]
    fn empty_subdirectory_loads_as_leaf() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("hollow")).unwrap();

        let tree = load(dir.path()).unwrap();

        // A directory with no entries has no children in the tree, which the
        // model reports as a file.
        assert_eq!(tree.file_paths(), ["hollow"]);
        assert!(tree.dir_paths().is_empty());
    }
}
