//! Code smell detectors
//!
//! Three detectors run over the function list extracted by the scanner:
//!
//! - `LongMethodDetector`: functions with too many lines of code
//! - `LongParameterListDetector`: functions with too many parameters
//! - `DuplicateCodeDetector`: function pairs with near-identical tokens
//!
//! `analyze_lines` is the single entry point: scan the buffer, build the
//! function models, run every detector in order, and assemble the report.
//! The run is fully synchronous and single-threaded; each run owns its own
//! buffer, function list, and occurrence lists.

mod base;
mod duplicate_code;
mod long_method;
mod long_parameter;

pub use base::{Detector, Thresholds};
pub use duplicate_code::{similarity_index, DuplicateCodeDetector};
pub use long_method::LongMethodDetector;
pub use long_parameter::LongParameterListDetector;

use crate::function::Function;
use crate::models::AnalysisReport;
use crate::scanner;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// All detectors, in reporting order.
pub fn all_detectors(thresholds: &Thresholds) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(LongMethodDetector::new(thresholds)),
        Box::new(LongParameterListDetector::new(thresholds)),
        Box::new(DuplicateCodeDetector::new(thresholds)),
    ]
}

/// Analyze one file's lines end to end.
///
/// A scan failure (unbalanced braces) aborts the whole run; no partial
/// report is produced.
pub fn analyze_lines(
    file: &Path,
    lines: &[String],
    thresholds: &Thresholds,
) -> Result<AnalysisReport> {
    let spans = scanner::scan(lines)
        .with_context(|| format!("failed to scan {}", file.display()))?;
    let functions: Vec<Function> = spans.iter().map(Function::from_span).collect();
    debug!(count = functions.len(), "extracted functions");

    let mut report = AnalysisReport::new(
        file.to_path_buf(),
        functions.iter().map(|f| f.name().to_string()).collect(),
    );

    for detector in all_detectors(thresholds) {
        let smells = detector.detect(&functions)?;
        debug!(detector = detector.name(), count = smells.len(), "detector finished");
        report.record(smells);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn to_lines(source: &str) -> Vec<String> {
        source.lines().map(String::from).collect()
    }

    #[test]
    fn test_analyze_lines_reports_names_in_declaration_order() {
        let lines = to_lines(
            "int zeta() { return 1; }\n\nvoid alpha(int x)\n{\n    use(x);\n}\n",
        );
        let report = analyze_lines(Path::new("t.cpp"), &lines, &Thresholds::default())
            .expect("should analyze");
        assert_eq!(report.function_names, vec!["zeta", "alpha"]);
        assert_eq!(report.file, PathBuf::from("t.cpp"));
    }

    #[test]
    fn test_analyze_lines_malformed_input_yields_no_partial_report() {
        let lines = to_lines("int fine() { return 1; }\nint broken() {\n    return 2;\n");
        assert!(analyze_lines(Path::new("t.cpp"), &lines, &Thresholds::default()).is_err());
    }

    #[test]
    fn test_long_method_and_parameter_list_on_same_function() {
        let mut source =
            String::from("void sprawl(int a, int b, int c, int d, int e)\n{\n");
        for i in 0..17 {
            source.push_str(&format!("    step({i});\n"));
        }
        source.push_str("}\n");

        let report = analyze_lines(Path::new("t.cpp"), &to_lines(&source), &Thresholds::default())
            .expect("should analyze");
        assert_eq!(report.long_method_occurrences.len(), 1);
        assert_eq!(report.long_parameter_list_occurrences.len(), 1);
        assert!(report.has_long_method());
        assert!(report.has_long_parameter_list());
        assert!(!report.has_duplicate_code());
    }
}
