//! Synthetic directory fixtures for experiments.
//!
//! A fixture is a real on-disk hierarchy: nested `dir_N/sub_M` chains with a
//! random depth, each holding a random handful of files drawn from a fixed
//! name pool. Generation is seeded so a configuration reproduces the same
//! layout every run.

use std::{fs, io::Write as _, path};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::BenchError;

/// Filename pool the generator (and the insert timing loop) draws from.
pub(crate) const FILE_NAMES: &[&str] = &[
    "test1.txt", "test2.txt", "test3.txt", "test4.txt", "test5.txt",
    "data1.csv", "data2.csv", "data3.csv", "data4.csv", "data5.csv",
    "config1.ini", "config2.ini", "config3.ini", "config4.ini", "config5.ini",
    "backup1.bak", "backup2.bak", "backup3.bak", "backup4.bak", "backup5.bak",
    "log1.log", "log2.log", "log3.log", "log4.log", "log5.log",
    "temp1.tmp", "temp2.tmp", "temp3.tmp", "temp4.tmp", "temp5.tmp",
    "doc1.doc", "doc2.doc", "doc3.doc", "doc4.doc", "doc5.doc",
    "img1.jpg", "img2.jpg", "img3.jpg", "img4.jpg", "img5.jpg",
    "video1.mp4", "video2.mp4", "video3.mp4", "video4.mp4", "video5.mp4",
    "audio1.mp3", "audio2.mp3", "audio3.mp3", "audio4.mp3", "audio5.mp3",
];

const MAX_DEPTH: usize = 5;
const MAX_FILES_PER_DIR: usize = 10;

/// Requested fixture shape.
#[derive(Debug, Clone)]
pub struct FixtureSpec {
    pub directories: usize,
    pub files: usize,
    pub seed: u64,
}

/// What generation actually produced. Directory chains are built whole, so
/// the directory count can overshoot the request by a few.
#[derive(Debug, Clone, Copy)]
pub struct FixtureStats {
    pub directories: usize,
    pub files: usize,
}

/// Build a fixture hierarchy under `base`, creating `base` if needed.
pub fn generate(base: &path::Path, spec: &FixtureSpec) -> Result<FixtureStats, BenchError> {
    fs::create_dir_all(base)?;

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut directories = 0;
    let mut files = 0;
    let mut index = 0;

    while directories < spec.directories || files < spec.files {
        let mut dir = base.join(format!("dir_{index}"));
        index += 1;
        fs::create_dir_all(&dir)?;
        directories += 1;

        let depth = rng.gen_range(1..=MAX_DEPTH);
        for level in 0..depth {
            if directories >= spec.directories {
                break;
            }
            dir.push(format!("sub_{level}"));
            fs::create_dir(&dir)?;
            directories += 1;
        }

        let files_here = rng.gen_range(1..=MAX_FILES_PER_DIR);
        for slot in 0..files_here {
            if files >= spec.files {
                break;
            }
            let name = FILE_NAMES[rng.gen_range(0..FILE_NAMES.len())];
            let mut file = fs::File::create(dir.join(format!("{name}_{slot}")))?;
            writeln!(file, "fixture file {files}")?;
            files += 1;
        }
    }

    info!(
        "generated fixture at {}: {} directories, {} files",
        base.display(),
        directories,
        files
    );
    Ok(FixtureStats { directories, files })
}

/// Delete a generated fixture. Missing bases are fine.
pub fn cleanup(base: &path::Path) -> Result<(), BenchError> {
    if base.exists() {
        fs::remove_dir_all(base)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_meets_requested_counts() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("fixture");
        let stats = generate(
            &base,
            &FixtureSpec {
                directories: 20,
                files: 40,
                seed: 7,
            },
        )
        .unwrap();

        assert!(stats.directories >= 20);
        assert!(stats.files >= 40);

        let tree = fstree_loader::load(&base).unwrap();
        assert!(tree.node_count() > 60);
    }

    #[test]
    fn generate_is_reproducible_for_a_seed() {
        let dir = tempdir().unwrap();
        let spec = FixtureSpec {
            directories: 10,
            files: 15,
            seed: 42,
        };

        let first = dir.path().join("one");
        let second = dir.path().join("two");
        generate(&first, &spec).unwrap();
        generate(&second, &spec).unwrap();

        let tree_one = fstree_loader::load(&first).unwrap();
        let tree_two = fstree_loader::load(&second).unwrap();
        assert_eq!(tree_one.file_paths(), tree_two.file_paths());
        assert_eq!(tree_one.dir_paths(), tree_two.dir_paths());
    }

    #[test]
    fn cleanup_removes_fixture_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("fixture");
        generate(
            &base,
            &FixtureSpec {
                directories: 3,
                files: 3,
                seed: 1,
            },
        )
        .unwrap();

        cleanup(&base).unwrap();
        assert!(!base.exists());
        cleanup(&base).unwrap();
    }
}
