//! whiff - line-heuristic code smell detection
//!
//! Analyzes the text of a single source file and flags three
//! maintainability smells: Long Method, Long Parameter List, and
//! Duplicated Code. Function extents are recovered with shallow
//! paren/brace line heuristics rather than a compiler front end.

pub mod cli;
pub mod detectors;
pub mod function;
pub mod models;
pub mod reporters;
pub mod scanner;
