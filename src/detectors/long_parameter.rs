//! Long Parameter List detector

use crate::detectors::base::{Detector, Thresholds};
use crate::function::Function;
use crate::models::Smell;
use anyhow::Result;
use tracing::info;

pub struct LongParameterListDetector {
    max_parameter_count: usize,
}

impl LongParameterListDetector {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            max_parameter_count: thresholds.max_parameter_count,
        }
    }
}

impl Detector for LongParameterListDetector {
    fn name(&self) -> &'static str {
        "long-parameter-list"
    }

    fn description(&self) -> &'static str {
        "Detects functions with too many parameters"
    }

    fn detect(&self, functions: &[Function]) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();

        for function in functions {
            let param_count = function.param_count();
            if param_count > self.max_parameter_count {
                smells.push(Smell::LongParameterList {
                    function_name: function.name().to_string(),
                    param_count,
                });
            }
        }

        info!(count = smells.len(), "long parameter list detection finished");
        Ok(smells)
    }
}
