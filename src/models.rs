//! Core data models: smell occurrences and the per-file analysis report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The three smell categories this tool reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmellKind {
    LongMethod,
    LongParameterList,
    DuplicatedCode,
}

impl std::fmt::Display for SmellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmellKind::LongMethod => write!(f, "Long Method"),
            SmellKind::LongParameterList => write!(f, "Long Parameter List"),
            SmellKind::DuplicatedCode => write!(f, "Duplicated Code"),
        }
    }
}

/// One smell occurrence. Occurrence lists are append-only while detection
/// runs and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "smell", rename_all = "snake_case")]
pub enum Smell {
    LongMethod {
        function_name: String,
        line_count: usize,
    },
    LongParameterList {
        function_name: String,
        param_count: usize,
    },
    DuplicatedCode {
        function_a: String,
        function_b: String,
        /// Token-count Jaccard similarity in `[0, 1]`.
        similarity: f64,
    },
}

impl Smell {
    pub fn kind(&self) -> SmellKind {
        match self {
            Smell::LongMethod { .. } => SmellKind::LongMethod,
            Smell::LongParameterList { .. } => SmellKind::LongParameterList,
            Smell::DuplicatedCode { .. } => SmellKind::DuplicatedCode,
        }
    }
}

/// Result of one analysis run over a single file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub file: PathBuf,
    /// Function names in declaration order.
    pub function_names: Vec<String>,
    pub long_method_occurrences: Vec<Smell>,
    pub long_parameter_list_occurrences: Vec<Smell>,
    pub duplicated_code_occurrences: Vec<Smell>,
}

impl AnalysisReport {
    pub fn new(file: PathBuf, function_names: Vec<String>) -> Self {
        Self {
            file,
            function_names,
            ..Default::default()
        }
    }

    /// File occurrences under the list for their kind, preserving order.
    pub fn record(&mut self, smells: Vec<Smell>) {
        for smell in smells {
            match smell.kind() {
                SmellKind::LongMethod => self.long_method_occurrences.push(smell),
                SmellKind::LongParameterList => self.long_parameter_list_occurrences.push(smell),
                SmellKind::DuplicatedCode => self.duplicated_code_occurrences.push(smell),
            }
        }
    }

    pub fn has_long_method(&self) -> bool {
        !self.long_method_occurrences.is_empty()
    }

    pub fn has_long_parameter_list(&self) -> bool {
        !self.long_parameter_list_occurrences.is_empty()
    }

    pub fn has_duplicate_code(&self) -> bool {
        !self.duplicated_code_occurrences.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.long_method_occurrences.len()
            + self.long_parameter_list_occurrences.len()
            + self.duplicated_code_occurrences.len()
    }
}
