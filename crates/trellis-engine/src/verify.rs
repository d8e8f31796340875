//! Independent coverage checks over generated case lists.
//!
//! These re-derive coverage from scratch rather than trusting the
//! generators' own bookkeeping, so the facade can prove the pairwise
//! invariant held before handing results to a caller.

use trellis_space::{ParameterSpace, TestCase, Value};

/// A pairwise requirement no generated case satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairGap {
    pub first: String,
    pub first_value: Value,
    pub second: String,
    pub second_value: Value,
}

impl std::fmt::Display for PairGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={} with {}={}",
            self.first, self.first_value, self.second, self.second_value
        )
    }
}

/// Every (parameter pair, value pair) combination missing from `cases`.
/// Empty means full pairwise coverage.
pub fn check_pair_coverage(space: &ParameterSpace, cases: &[TestCase]) -> Vec<PairGap> {
    let mut gaps = Vec::new();
    for i in 0..space.len() {
        for j in (i + 1)..space.len() {
            for v in &space.parameters[i].values {
                for w in &space.parameters[j].values {
                    let hit = cases
                        .iter()
                        .any(|case| &case.values[i] == v && &case.values[j] == w);
                    if !hit {
                        gaps.push(PairGap {
                            first: space.parameters[i].name.clone(),
                            first_value: v.clone(),
                            second: space.parameters[j].name.clone(),
                            second_value: w.clone(),
                        });
                    }
                }
            }
        }
    }
    gaps
}

/// Every (parameter, value) the cases never exercise. Empty means the
/// all-values guarantee holds.
pub fn check_value_coverage(space: &ParameterSpace, cases: &[TestCase]) -> Vec<(String, Value)> {
    let mut gaps = Vec::new();
    for (col, param) in space.parameters.iter().enumerate() {
        for value in &param.values {
            if !cases.iter().any(|case| &case.values[col] == value) {
                gaps.push((param.name.clone(), value.clone()));
            }
        }
    }
    gaps
}
