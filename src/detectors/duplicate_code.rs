//! Duplicated Code detector
//!
//! Compares every unordered pair of distinct functions exactly once and
//! flags pairs whose token-count Jaccard similarity exceeds the threshold.
//!
//! The similarity index is computed over whitespace-token multisets built
//! from each function's body lines:
//!
//! - intersection weight: for every token present in both bodies, the sum
//!   of its occurrences on both sides
//! - union weight: total token occurrences across both bodies
//! - similarity = intersection weight / union weight
//!
//! Two bodies over the same token vocabulary score 1.0 regardless of per
//! token counts; bodies with disjoint vocabularies score 0.0.

use crate::detectors::base::{Detector, Thresholds};
use crate::function::Function;
use crate::models::Smell;
use anyhow::Result;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

pub struct DuplicateCodeDetector {
    max_similarity: f64,
}

impl DuplicateCodeDetector {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            max_similarity: thresholds.max_similarity,
        }
    }
}

impl Detector for DuplicateCodeDetector {
    fn name(&self) -> &'static str {
        "duplicated-code"
    }

    fn description(&self) -> &'static str {
        "Detects function pairs with near-identical token content"
    }

    fn detect(&self, functions: &[Function]) -> Result<Vec<Smell>> {
        let mut smells = Vec::new();
        let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();

        for i in 0..functions.len() {
            for j in 0..functions.len() {
                if i == j {
                    continue;
                }
                // Canonical pair key so each unordered pair is compared
                // exactly once regardless of scan order.
                if !seen_pairs.insert((i.min(j), i.max(j))) {
                    continue;
                }

                let similarity =
                    similarity_index(functions[i].body_lines(), functions[j].body_lines());
                debug!(
                    a = functions[i].name(),
                    b = functions[j].name(),
                    similarity,
                    "compared function pair"
                );

                if similarity > self.max_similarity {
                    smells.push(Smell::DuplicatedCode {
                        function_a: functions[i].name().to_string(),
                        function_b: functions[j].name().to_string(),
                        similarity,
                    });
                }
            }
        }

        info!(count = smells.len(), "duplicated code detection finished");
        Ok(smells)
    }
}

/// Token-count Jaccard similarity of two bodies, in `[0, 1]`. Zero when
/// both bodies are empty of tokens.
pub fn similarity_index(body_a: &[String], body_b: &[String]) -> f64 {
    let counts_a = token_counts(body_a);
    let counts_b = token_counts(body_b);

    let mut intersection_weight = 0usize;
    let mut union_weight = 0usize;

    for (token, count_a) in &counts_a {
        union_weight += count_a;
        if let Some(count_b) = counts_b.get(token) {
            intersection_weight += count_a + count_b;
        }
    }
    for count_b in counts_b.values() {
        union_weight += count_b;
    }

    if union_weight == 0 {
        return 0.0;
    }
    intersection_weight as f64 / union_weight as f64
}

fn token_counts(body: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for line in body {
        for token in line.split_whitespace() {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}
