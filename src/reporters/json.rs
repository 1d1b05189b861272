//! JSON reporter

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render a report as pretty-printed JSON.
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
