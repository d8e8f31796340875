//! Strategy selection facade.
//!
//! Validates a parameter space, dispatches to one of the three generators,
//! and re-verifies the pairwise invariant before returning. The input space
//! is never mutated and output order is the generator's deterministic order.

use serde::{Deserialize, Serialize};

use trellis_space::{ParameterSpace, SpaceError, TestCase};

use crate::{all_values, cartesian, pairwise, verify};

/// How a parameter space is expanded into test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Minimal list covering every single value at least once.
    AllValues,
    /// Near-minimal list covering every 2-way value combination.
    AllPairs,
    /// The full cross product.
    AllCombinations,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::AllValues => "all_values",
            Strategy::AllPairs => "all_pairs",
            Strategy::AllCombinations => "all_combinations",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid parameter space: {0}")]
    Space(#[from] SpaceError),

    /// The pairwise engine finished with uncovered requirements. This means
    /// a construction bug and is surfaced instead of returning an
    /// incomplete covering set.
    #[error("pairwise construction left {missing} pair requirement(s) uncovered")]
    IncompleteCoverage { missing: usize },

    #[error("generation would produce {cases} case(s), over the budget of {max}")]
    TooLarge { cases: u64, max: u64 },
}

/// Generate the ordered case list for `space` under `strategy`.
pub fn generate(space: &ParameterSpace, strategy: Strategy) -> Result<Vec<TestCase>, EngineError> {
    space.validate()?;
    match strategy {
        Strategy::AllValues => Ok(all_values::cover_all_values(space)?),
        Strategy::AllPairs => {
            let cases = pairwise::cover_all_pairs(space)?;
            let gaps = verify::check_pair_coverage(space, &cases);
            if !gaps.is_empty() {
                return Err(EngineError::IncompleteCoverage { missing: gaps.len() });
            }
            Ok(cases)
        }
        Strategy::AllCombinations => Ok(cartesian::exhaustive(space)?),
    }
}

/// Cheap size estimate for a generation call, without generating.
///
/// Exact for all-values and all-combinations; for all-pairs it returns the
/// covering-array lower bound (the product of the two largest
/// cardinalities), which the engine meets or slightly exceeds.
pub fn estimated_case_count(space: &ParameterSpace, strategy: Strategy) -> u64 {
    match strategy {
        Strategy::AllValues => space.max_cardinality() as u64,
        Strategy::AllPairs => pairwise::pair_lower_bound(space),
        Strategy::AllCombinations => space.total_combinations(),
    }
}
