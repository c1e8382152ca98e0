//! Result export and console summary.

use std::{fs, path};

use nu_ansi_term::Style;

use crate::error::BenchError;
use crate::experiment::ExperimentResult;

const CSV_HEADER: &str = "directories,files,load_ms,search_ns,insert_ns,remove_ns,height,nodes";

/// Write results as CSV, one row per experiment configuration.
pub fn write_csv(results: &[ExperimentResult], out: &path::Path) -> Result<(), BenchError> {
    let mut body = String::from(CSV_HEADER);
    body.push('\n');
    for r in results {
        body.push_str(&format!(
            "{},{},{:.3},{:.2},{:.2},{:.2},{},{}\n",
            r.directories, r.files, r.load_ms, r.search_ns, r.insert_ns, r.remove_ns, r.height,
            r.nodes
        ));
    }
    fs::write(out, body)?;
    Ok(())
}

/// Write results as pretty-printed JSON.
pub fn write_json(results: &[ExperimentResult], out: &path::Path) -> Result<(), BenchError> {
    let body = serde_json::to_string_pretty(results)?;
    fs::write(out, body)?;
    Ok(())
}

/// Print an aligned summary table of all configurations.
pub fn print_summary(results: &[ExperimentResult]) {
    let header = format!(
        "{:<16} {:>12} {:>12} {:>12} {:>12} {:>8} {:>10}",
        "dirs/files", "load (ms)", "search (ns)", "insert (ns)", "remove (ns)", "height", "nodes"
    );
    println!("{}", Style::new().bold().paint(&header));
    println!("{}", "-".repeat(header.len()));

    for r in results {
        let shape = format!("{}/{}", r.directories, r.files);
        println!(
            "{:<16} {:>12.3} {:>12.2} {:>12.2} {:>12.2} {:>8} {:>10}",
            shape, r.load_ms, r.search_ns, r.insert_ns, r.remove_ns, r.height, r.nodes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_result() -> ExperimentResult {
        ExperimentResult {
            directories: 10,
            files: 20,
            load_ms: 1.234,
            search_ns: 567.89,
            insert_ns: 321.0,
            remove_ns: 400.5,
            height: 4,
            nodes: 31,
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.csv");

        write_csv(&[sample_result()], &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("10,20,1.234,567.89,321.00,400.50,4,31"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_round_trips() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.json");

        write_json(&[sample_result()], &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let parsed: Vec<ExperimentResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].nodes, 31);
    }
}
