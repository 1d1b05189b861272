//! `analyze` command: read a file, run every detector, render the report.

use crate::detectors::{analyze_lines, Thresholds};
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Extensions the line heuristics were designed against. Other files are
/// still analyzed, with a warning.
const EXPECTED_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "h", "hpp"];

pub fn run(file: &Path, format: &str, thresholds: &Thresholds) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let lines = read_source_lines(file)?;
    let report = analyze_lines(file, &lines, thresholds)?;

    print!("{}", reporters::render(&report, format)?);
    Ok(())
}

/// Read a file into the ordered line buffer the scanner consumes. The
/// buffer is never mutated after load.
pub fn read_source_lines(file: &Path) -> Result<Vec<String>> {
    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !EXPECTED_EXTENSIONS.contains(&ext) {
        warn!(
            file = %file.display(),
            "unexpected file extension; heuristics are tuned for C/C++ sources"
        );
    }

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read file: {}", file.display()))?;
    Ok(content.lines().map(String::from).collect())
}
