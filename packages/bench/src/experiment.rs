//! Timed experiments over a fixture hierarchy.
//!
//! One experiment generates a fixture, loads it into a tree once (timed),
//! then measures the per-operation cost of search, explicit insert, and
//! removal over randomly drawn known paths.

use std::path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fstree_core::{Path, Tree};

use crate::error::BenchError;
use crate::fixture::{self, FixtureSpec, FILE_NAMES};

/// Shape and repetition count of one experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub directories: usize,
    pub files: usize,
    pub repetitions: usize,
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            directories: 2_000,
            files: 10_000,
            repetitions: 100_000,
            seed: 0xf57,
        }
    }
}

/// Measurements of one experiment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub directories: usize,
    pub files: usize,
    pub load_ms: f64,
    pub search_ns: f64,
    pub insert_ns: f64,
    pub remove_ns: f64,
    pub height: usize,
    pub nodes: usize,
}

/// Generate a fixture under `base` and measure every operation once.
///
/// The fixture is left on disk; callers decide when to
/// [`fixture::cleanup`] it.
pub fn run(base: &path::Path, config: &ExperimentConfig) -> Result<ExperimentResult, BenchError> {
    info!(
        "running experiment: {} directories, {} files, {} repetitions",
        config.directories, config.files, config.repetitions
    );

    fixture::generate(
        base,
        &FixtureSpec {
            directories: config.directories,
            files: config.files,
            seed: config.seed,
        },
    )?;

    let started = Instant::now();
    let mut tree = fstree_loader::load(base)?;
    let load_ms = started.elapsed().as_secs_f64() * 1_000.0;

    let file_paths = decompose_all(tree.file_paths());
    let dir_paths = decompose_all(tree.dir_paths());
    if file_paths.is_empty() {
        return Err(BenchError::EmptyFixture { kind: "file" });
    }
    if dir_paths.is_empty() {
        return Err(BenchError::EmptyFixture { kind: "directory" });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let search_ns = time_searches(&tree, &file_paths, config.repetitions, &mut rng);
    let insert_ns = time_inserts(&mut tree, &dir_paths, config.repetitions, &mut rng);
    let remove_ns = time_removals(&mut tree, &file_paths, config.repetitions, &mut rng);

    Ok(ExperimentResult {
        directories: config.directories,
        files: config.files,
        load_ms,
        search_ns,
        insert_ns,
        remove_ns,
        height: tree.height(),
        nodes: tree.node_count(),
    })
}

fn decompose_all(paths: Vec<String>) -> Vec<Path> {
    paths.iter().map(|p| Path::parse(p)).collect()
}

/// Average nanoseconds per search over randomly drawn known paths.
fn time_searches(tree: &Tree, paths: &[Path], repetitions: usize, rng: &mut StdRng) -> f64 {
    let started = Instant::now();
    for _ in 0..repetitions {
        let path = &paths[rng.gen_range(0..paths.len())];
        let _ = tree.search(path);
    }
    started.elapsed().as_nanos() as f64 / repetitions as f64
}

/// Average nanoseconds per explicit insert of a fresh leaf under a randomly
/// drawn existing directory.
fn time_inserts(tree: &mut Tree, dirs: &[Path], repetitions: usize, rng: &mut StdRng) -> f64 {
    let started = Instant::now();
    for round in 0..repetitions {
        let dir = &dirs[rng.gen_range(0..dirs.len())];
        let name = FILE_NAMES[rng.gen_range(0..FILE_NAMES.len())];
        let path = Path::parse(&format!("{dir}/{name}_{round}"));
        let _ = tree.insert(&path);
    }
    started.elapsed().as_nanos() as f64 / repetitions as f64
}

/// Average nanoseconds per removal over distinct known file paths.
///
/// Each removal targets a different path so every timed call does real work;
/// when the fixture holds fewer files than `repetitions` the loop is shorter
/// and the average says so.
fn time_removals(tree: &mut Tree, paths: &[Path], repetitions: usize, rng: &mut StdRng) -> f64 {
    let mut sample: Vec<&Path> = paths.iter().collect();
    sample.shuffle(rng);
    sample.truncate(repetitions);
    if sample.len() < repetitions {
        debug!(
            "only {} distinct file paths available for removal timing",
            sample.len()
        );
    }

    let started = Instant::now();
    for path in &sample {
        let _ = tree.remove(path);
    }
    started.elapsed().as_nanos() as f64 / sample.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_produces_consistent_measurements() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("exp");
        let config = ExperimentConfig {
            directories: 15,
            files: 30,
            repetitions: 200,
            seed: 9,
        };

        let result = run(&base, &config).unwrap();

        assert_eq!(result.directories, 15);
        assert_eq!(result.files, 30);
        assert!(result.load_ms >= 0.0);
        assert!(result.search_ns >= 0.0);
        assert!(result.insert_ns >= 0.0);
        assert!(result.remove_ns >= 0.0);
        assert!(result.height >= 1);
        assert!(result.nodes > 30);

        fixture::cleanup(&base).unwrap();
    }

    #[test]
    fn timing_loops_survive_small_samples() {
        let mut tree = Tree::new();
        tree.insert_path(&fstree_core::path!("only/file.txt")).unwrap();
        let files = vec![Path::parse("only/file.txt")];
        let dirs = vec![Path::parse("only")];
        let mut rng = StdRng::seed_from_u64(1);

        assert!(time_searches(&tree, &files, 10, &mut rng) >= 0.0);
        assert!(time_inserts(&mut tree, &dirs, 10, &mut rng) >= 0.0);
        assert!(time_removals(&mut tree, &files, 10, &mut rng) >= 0.0);
        assert_eq!(tree.search(&Path::parse("only/file.txt")), None);
    }
}
