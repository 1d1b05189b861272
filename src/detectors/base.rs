//! Base detector trait and threshold configuration

use crate::function::Function;
use crate::models::Smell;
use anyhow::Result;

/// Smell thresholds. Every comparison is strict `>`: a function exactly at
/// a threshold is never flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Lines of code (non-blank, non-comment) a function may have.
    pub max_lines_of_code: usize,
    /// Parameters a function may take.
    pub max_parameter_count: usize,
    /// Similarity index a function pair may reach.
    pub max_similarity: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_lines_of_code: 15,
            max_parameter_count: 3,
            max_similarity: 0.75,
        }
    }
}

/// Trait for all smell detectors.
///
/// Detectors are total over any successfully extracted function list: they
/// classify, they do not fail independently of extraction. The `Result`
/// return matches the rest of the application's fallible surface.
pub trait Detector {
    /// Unique identifier for this detector.
    fn name(&self) -> &'static str;

    /// Human-readable description of what this detector finds.
    fn description(&self) -> &'static str;

    /// Run detection over the extracted functions, in declaration order.
    fn detect(&self, functions: &[Function]) -> Result<Vec<Smell>>;
}
