//! Size budgets for case generation.
//!
//! Generation is synchronous and caller-controlled, so the only resource
//! worth capping up front is output size: an all-combinations request over a
//! large space can dwarf what a test runner can usefully execute. Budgets
//! are checked against the engine's estimate before any case is built.

use serde::{Deserialize, Serialize};

use trellis_engine::EngineError;

/// Cap on the number of cases a single generation may produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseBudget {
    pub max_cases: u64,
}

impl Default for CaseBudget {
    fn default() -> Self {
        Self { max_cases: 100_000 }
    }
}

impl CaseBudget {
    pub fn new(max_cases: u64) -> Self {
        Self { max_cases }
    }
}

/// Reject an estimated generation size that exceeds the budget.
pub fn check_budget(estimate: u64, budget: &CaseBudget) -> Result<(), EngineError> {
    if estimate > budget.max_cases {
        return Err(EngineError::TooLarge {
            cases: estimate,
            max: budget.max_cases,
        });
    }
    Ok(())
}
