//! End-to-end tests over fixture files
//!
//! These drive the full pipeline (read file -> scan -> model -> detect ->
//! report) through the library API, the same path the CLI handlers take.

use std::path::{Path, PathBuf};
use whiff::cli::analyze::read_source_lines;
use whiff::detectors::{analyze_lines, similarity_index, Thresholds};
use whiff::models::Smell;
use whiff::scanner::{self, ScanError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn to_lines(source: &str) -> Vec<String> {
    source.lines().map(String::from).collect()
}

#[test]
fn analyze_sample_fixture() {
    let file = fixture("sample.cpp");
    let lines = read_source_lines(&file).expect("should read fixture");
    let report =
        analyze_lines(&file, &lines, &Thresholds::default()).expect("should analyze");

    // Declaration order; the forward declaration of clamp is not a function.
    assert_eq!(
        report.function_names,
        vec!["clamp", "renderDashboard", "totalPrice", "totalWeight"]
    );

    // renderDashboard is 20 lines with 5 parameters: both smells, one function.
    assert_eq!(
        report.long_method_occurrences,
        vec![Smell::LongMethod {
            function_name: "renderDashboard".into(),
            line_count: 20,
        }]
    );
    assert_eq!(
        report.long_parameter_list_occurrences,
        vec![Smell::LongParameterList {
            function_name: "renderDashboard".into(),
            param_count: 5,
        }]
    );

    // totalPrice and totalWeight share an identical body: exactly one
    // occurrence for the unordered pair.
    assert_eq!(
        report.duplicated_code_occurrences,
        vec![Smell::DuplicatedCode {
            function_a: "totalPrice".into(),
            function_b: "totalWeight".into(),
            similarity: 1.0,
        }]
    );

    assert!(report.has_long_method());
    assert!(report.has_long_parameter_list());
    assert!(report.has_duplicate_code());
}

#[test]
fn analyze_unbalanced_fixture_fails_without_partial_results() {
    let file = fixture("unbalanced.cpp");
    let lines = read_source_lines(&file).expect("should read fixture");

    // The scanner itself reports the malformed input...
    let err = scanner::scan(&lines).expect_err("should fail");
    assert!(matches!(err, ScanError::UnbalancedBraces { .. }));

    // ...and the full pipeline surfaces it instead of a truncated report.
    assert!(analyze_lines(&file, &lines, &Thresholds::default()).is_err());
}

#[test]
fn analyze_one_line_twins() {
    let lines = to_lines(
        "int add(int a, int b) { return a + b; }\nint sum(int x, int y) { return x + y; }\n",
    );

    // Under the default threshold neither per-function smell triggers:
    // both are one-line, two-parameter functions.
    let report = analyze_lines(Path::new("twins.cpp"), &lines, &Thresholds::default())
        .expect("should analyze");
    assert_eq!(report.function_names, vec!["add", "sum"]);
    assert!(!report.has_long_method());
    assert!(!report.has_long_parameter_list());

    // The bodies share `return` and `+` but differ in operands, which the
    // token-count formula scores at exactly 0.5.
    let a = vec![" return a + b; ".to_string()];
    let b = vec![" return x + y; ".to_string()];
    assert!((similarity_index(&a, &b) - 0.5).abs() < f64::EPSILON);

    // Lowering the similarity threshold below that score yields exactly
    // one occurrence for the unordered pair, never two.
    let relaxed = Thresholds {
        max_similarity: 0.45,
        ..Thresholds::default()
    };
    let report =
        analyze_lines(Path::new("twins.cpp"), &lines, &relaxed).expect("should analyze");
    assert_eq!(
        report.duplicated_code_occurrences,
        vec![Smell::DuplicatedCode {
            function_a: "add".into(),
            function_b: "sum".into(),
            similarity: 0.5,
        }]
    );
}

#[test]
fn read_source_lines_preserves_order_and_count() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("scratch.cpp");
    std::fs::write(&path, "int one() { return 1; }\n\nint two() { return 2; }\n")
        .expect("should write scratch file");

    let lines = read_source_lines(&path).expect("should read");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "int one() { return 1; }");
    assert_eq!(lines[1], "");

    let report =
        analyze_lines(&path, &lines, &Thresholds::default()).expect("should analyze");
    assert_eq!(report.function_names, vec!["one", "two"]);
}

#[test]
fn read_source_lines_missing_file_is_an_error() {
    assert!(read_source_lines(&fixture("does-not-exist.cpp")).is_err());
}
