//! CLI command definitions and handlers

pub mod analyze;
mod functions;

use crate::detectors::Thresholds;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// whiff - line-heuristic code smell detection for a single source file
#[derive(Parser, Debug)]
#[command(name = "whiff")]
#[command(
    version,
    about = "Flag Long Method, Long Parameter List, and Duplicated Code in one source file",
    long_about = "whiff scans a single source file with line-oriented paren/brace \
heuristics (no compiler front end), recovers every function definition, and flags \
three maintainability smells: Long Method, Long Parameter List, and Duplicated Code.",
    after_help = "\
Examples:
  whiff analyze widget.cpp                   Analyze one file
  whiff analyze widget.cpp --format json     JSON output for scripting
  whiff analyze widget.cpp --max-lines 30    Raise the Long Method threshold
  whiff functions widget.cpp                 List extracted function names"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all smell detectors over one source file
    Analyze {
        /// Source file to analyze
        file: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Lines of code a function may have before Long Method triggers
        #[arg(long, default_value_t = Thresholds::default().max_lines_of_code)]
        max_lines: usize,

        /// Parameters a function may take before Long Parameter List triggers
        #[arg(long, default_value_t = Thresholds::default().max_parameter_count)]
        max_params: usize,

        /// Similarity index a pair may reach before Duplicated Code triggers
        #[arg(long, default_value_t = Thresholds::default().max_similarity)]
        max_similarity: f64,
    },

    /// List extracted function names in declaration order
    Functions {
        /// Source file to scan
        file: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            file,
            format,
            max_lines,
            max_params,
            max_similarity,
        } => {
            let thresholds = Thresholds {
                max_lines_of_code: max_lines,
                max_parameter_count: max_params,
                max_similarity,
            };
            analyze::run(&file, &format, &thresholds)
        }
        Commands::Functions { file } => functions::run(&file),
    }
}
