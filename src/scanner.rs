//! Function-boundary scanner
//!
//! Recovers function extents from raw source text in a single forward pass,
//! using paren/brace heuristics instead of a real parser. Each recovered
//! span runs from the line carrying the header's `(` through the line that
//! closes the body's first `{`.
//!
//! The line heuristics are deliberately shallow: comment detection only
//! looks at the first non-whitespace character of a line, so inline
//! comments, multi-line block comments, and brace characters inside string
//! or char literals can corrupt classification and brace counting. Inputs
//! that defeat the heuristics fail with [`ScanError`] rather than producing
//! a partial result.

use thiserror::Error;
use tracing::debug;

const INCLUDE_DIRECTIVE: &str = "#include";

/// Fatal scan failure. The whole analysis of the file aborts; no partial
/// span list is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// Ran out of input while looking for the `{` that opens a body.
    #[error("malformed input: no opening brace found for function header at line {header_line}")]
    MissingOpeningBrace { header_line: usize },

    /// Ran out of input before the body's first `{` was closed.
    #[error("malformed input: unbalanced braces in function starting at line {header_line}")]
    UnbalancedBraces { header_line: usize },
}

/// Classification of a single source line.
///
/// The heuristics mirror the shallow string sniffing the scanner is built
/// on: first non-whitespace char `/` or `*` means comment, a line without
/// `(` cannot start a definition, and a line ending in `;` is taken for a
/// forward declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty, or a bare `\r`/`\n`.
    Blank,
    /// First non-whitespace character is `/` or `*`.
    Comment,
    /// Contains an `#include` directive.
    Directive,
    /// Ends in `;` (ignoring trailing whitespace/CR).
    ForwardDeclaration,
    /// None of the above and carries a `(`: starts a function definition.
    HeaderStart,
    /// Anything else (no `(` on the line).
    Other,
}

/// Classify one line. This is the single source of truth for line
/// classification; the skip loops below are defined in terms of it.
pub fn classify_line(line: &str) -> LineKind {
    if is_blank_line(line) {
        LineKind::Blank
    } else if is_comment(line) {
        LineKind::Comment
    } else if line.contains(INCLUDE_DIRECTIVE) {
        LineKind::Directive
    } else if !line.contains('(') {
        LineKind::Other
    } else if ends_with_ignoring_trailing_ws(line, ';') {
        LineKind::ForwardDeclaration
    } else {
        LineKind::HeaderStart
    }
}

fn is_blank_line(line: &str) -> bool {
    line.is_empty() || line == "\r" || line == "\n"
}

fn is_comment(line: &str) -> bool {
    matches!(line.trim_start().chars().next(), Some('/') | Some('*'))
}

fn ends_with_ignoring_trailing_ws(line: &str, ch: char) -> bool {
    line.trim_end_matches([' ', '\r', '\n']).ends_with(ch)
}

/// One recovered function extent. Line indices are 0-based positions in
/// the input buffer; `content` holds the non-blank, non-comment lines from
/// `header_line` through `end_line` inclusive.
#[derive(Debug, Clone)]
pub struct FunctionSpan {
    pub header_line: usize,
    pub body_start: usize,
    pub end_line: usize,
    pub content: Vec<String>,
}

/// Partition the buffer into function spans with a single forward cursor.
///
/// One-line definitions (header, `{`, body, and `}` on one physical line)
/// are first-class: header, body-start, and end coincide.
pub fn scan(lines: &[String]) -> Result<Vec<FunctionSpan>, ScanError> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    while cursor < lines.len() {
        cursor = skip_blank_lines(lines, cursor);
        cursor = skip_until_header(lines, cursor);
        if cursor >= lines.len() {
            break;
        }

        let header_line = cursor;
        let body_start = find_opening_brace_line(lines, header_line)
            .ok_or(ScanError::MissingOpeningBrace { header_line })?;
        let end_line = find_closing_brace_line(lines, body_start)
            .ok_or(ScanError::UnbalancedBraces { header_line })?;

        debug!(header_line, body_start, end_line, "recovered function span");
        spans.push(FunctionSpan {
            header_line,
            body_start,
            end_line,
            content: extract_content(lines, header_line, end_line),
        });

        cursor = end_line + 1;
    }

    Ok(spans)
}

fn skip_blank_lines(lines: &[String], mut cursor: usize) -> usize {
    while cursor < lines.len() && classify_line(&lines[cursor]) == LineKind::Blank {
        cursor += 1;
    }
    cursor
}

fn skip_until_header(lines: &[String], mut cursor: usize) -> usize {
    while cursor < lines.len() && classify_line(&lines[cursor]) != LineKind::HeaderStart {
        cursor += 1;
    }
    cursor
}

fn find_opening_brace_line(lines: &[String], start: usize) -> Option<usize> {
    lines[start..]
        .iter()
        .position(|line| line.contains('{'))
        .map(|offset| start + offset)
}

/// Walk forward from the body-start line counting brace depth; the line on
/// which the depth returns to the value it held before the first `{` is
/// the end of the function.
fn find_closing_brace_line(lines: &[String], start: usize) -> Option<usize> {
    let mut open_count = 0usize;
    for (offset, line) in lines[start..].iter().enumerate() {
        if line_closes_initial_brace(line, &mut open_count) {
            return Some(start + offset);
        }
    }
    None
}

fn line_closes_initial_brace(line: &str, open_count: &mut usize) -> bool {
    for ch in line.chars() {
        match ch {
            '{' => *open_count += 1,
            '}' => {
                if *open_count == 1 {
                    return true;
                }
                if *open_count > 0 {
                    *open_count -= 1;
                }
            }
            _ => {}
        }
    }
    false
}

fn extract_content(lines: &[String], start: usize, end: usize) -> Vec<String> {
    lines[start..=end]
        .iter()
        .filter(|line| !matches!(classify_line(line), LineKind::Blank | LineKind::Comment))
        .cloned()
        .collect()
}
