//! Text (terminal) reporter

use crate::models::{AnalysisReport, Smell};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render a report as formatted terminal output.
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{BOLD}whiff analysis{RESET} {DIM}{}{RESET}\n",
        report.file.display()
    ));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    out.push_str(&format!(
        "{BOLD}FUNCTIONS{RESET} ({})\n",
        report.function_names.len()
    ));
    for name in &report.function_names {
        out.push_str(&format!("  -> {name}\n"));
    }
    out.push('\n');

    out.push_str(&format!("{BOLD}LONG METHOD{RESET}\n"));
    if report.has_long_method() {
        for smell in &report.long_method_occurrences {
            if let Smell::LongMethod {
                function_name,
                line_count,
            } = smell
            {
                out.push_str(&format!(
                    "  The {function_name} function is a Long Method. \
                     It contains {line_count} lines of code.\n"
                ));
            }
        }
    } else {
        out.push_str("  No function has Long Method!\n");
    }
    out.push('\n');

    out.push_str(&format!("{BOLD}LONG PARAMETER LIST{RESET}\n"));
    if report.has_long_parameter_list() {
        for smell in &report.long_parameter_list_occurrences {
            if let Smell::LongParameterList {
                function_name,
                param_count,
            } = smell
            {
                out.push_str(&format!(
                    "  The {function_name} function has a Long Parameter List. \
                     It contains {param_count} parameters.\n"
                ));
            }
        }
    } else {
        out.push_str("  No function has Long Parameter List!\n");
    }
    out.push('\n');

    out.push_str(&format!("{BOLD}DUPLICATED CODE{RESET}\n"));
    if report.has_duplicate_code() {
        for smell in &report.duplicated_code_occurrences {
            if let Smell::DuplicatedCode {
                function_a,
                function_b,
                similarity,
            } = smell
            {
                out.push_str(&format!(
                    "  The functions {function_a} and {function_b} are duplicated. \
                     Their similarity percentage is {:.1}%.\n",
                    similarity * 100.0
                ));
            }
        }
    } else {
        out.push_str("  No functions contain Duplicated Code!\n");
    }

    Ok(out)
}
