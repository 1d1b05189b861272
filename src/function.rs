//! Function model derived from one scanner span
//!
//! Everything here is computed once from the span's raw content and frozen:
//! name, parameter count, body lines, and the concatenated code string the
//! similarity engine compares. The extraction heuristics are intentionally
//! naive and must stay that way: parameter counting treats every comma
//! between the header's parens as a separator, so nested template argument
//! lists and function-pointer types are miscounted.

use crate::scanner::FunctionSpan;
use serde::{Deserialize, Serialize};

/// An extracted function. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    name: String,
    header_line: usize,
    body_lines: Vec<String>,
    line_count: usize,
    param_count: usize,
    code_string: String,
}

impl Function {
    pub fn from_span(span: &FunctionSpan) -> Self {
        let header = span.content.first().map(String::as_str).unwrap_or("");
        let line_count = span.content.len();

        Self {
            name: extract_name(header),
            header_line: span.header_line,
            body_lines: extract_body_lines(&span.content),
            line_count,
            param_count: extract_parameter_count(header),
            code_string: span.content.concat(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 0-based index of the header line in the source buffer.
    pub fn header_line(&self) -> usize {
        self.header_line
    }

    /// Lines strictly between the opening and closing brace lines.
    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    /// Non-blank, non-comment lines from header through closing brace,
    /// inclusive.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn param_count(&self) -> usize {
        self.param_count
    }

    /// All span lines concatenated, for raw-text comparison.
    pub fn code_string(&self) -> &str {
        &self.code_string
    }
}

/// The name is the second whitespace-delimited header token (or the third
/// when the second is a bare `*` or `&` of a pointer/reference return
/// type), truncated at its first `(`.
fn extract_name(header: &str) -> String {
    let mut tokens = header.split_whitespace().skip(1);
    let token = match tokens.next() {
        Some("*") | Some("&") => tokens.next().unwrap_or(""),
        Some(token) => token,
        None => "",
    };
    token.split('(').next().unwrap_or("").to_string()
}

/// Count parameters in the substring strictly between the header's first
/// `(` and last `)`. Empty or whitespace-only means zero; otherwise one
/// plus the number of commas, counted naively.
fn extract_parameter_count(header: &str) -> usize {
    let params = substring_between(header, '(', ')');
    if params.trim().is_empty() {
        return 0;
    }
    1 + params.matches(',').count()
}

fn extract_body_lines(content: &[String]) -> Vec<String> {
    // One-line definition: body is the text between the braces.
    if content.len() == 1 {
        return vec![substring_between(&content[0], '{', '}').to_string()];
    }

    // The opening brace sits on the header line or the line after it.
    let body_start = if content[0].contains('{') { 1 } else { 2 };
    let body_end = content.len() - 1;
    content
        .get(body_start..body_end)
        .unwrap_or(&[])
        .to_vec()
}

/// Substring strictly between the first `left` and the last `right`. Runs
/// to the end of the line when `right` is absent (multi-line headers).
fn substring_between(line: &str, left: char, right: char) -> &str {
    let start = line.find(left).map(|i| i + left.len_utf8()).unwrap_or(0);
    let end = line.rfind(right).unwrap_or(line.len());
    if start <= end {
        &line[start..end]
    } else {
        ""
    }
}
