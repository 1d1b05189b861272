//! `functions` command: list extracted function names.

use crate::cli::analyze::read_source_lines;
use crate::function::Function;
use crate::scanner;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let lines = read_source_lines(file)?;
    let spans = scanner::scan(&lines)
        .with_context(|| format!("failed to scan {}", file.display()))?;

    println!("The file you provided contains the following functions:");
    for span in &spans {
        let function = Function::from_span(span);
        println!("  -> {}", function.name());
    }
    Ok(())
}
