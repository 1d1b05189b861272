//! Long Method detector
//!
//! Flags functions whose line count exceeds the configured threshold. The
//! line count excludes blank and comment lines; exclusion happens at
//! extraction time, before the threshold check.

use crate::detectors::base::{Detector, Thresholds};
use crate::function::Function;
use crate::models::Smell;
use anyhow::Result;
use tracing::info;

pub struct LongMethodDetector {
    max_lines_of_code: usize,
}

impl LongMethodDetector {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            max_lines_of_code: thresholds.max_lines_of_code,
        }
    }
}

impl Detector for LongMethodDetector {
    fn name(&self) -> &'static str {
        "long-method"
    }

    fn description(&self) -> &'static str {
        "Detects functions with too many lines of code"
    }

    fn detect(&self, functions: &[Function]) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();

        for function in functions {
            let line_count = function.line_count();
            if line_count > self.max_lines_of_code {
                smells.push(Smell::LongMethod {
                    function_name: function.name().to_string(),
                    line_count,
                });
            }
        }

        info!(count = smells.len(), "long method detection finished");
        Ok(smells)
    }
}
