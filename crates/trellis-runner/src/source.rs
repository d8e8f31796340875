//! Sources of generated test cases.
//!
//! The engine's output reaches a parameterized-test mechanism through a
//! plain callback contract: a suite owns something that can produce an
//! ordered case list. Abstracted behind a trait so suites can be driven by
//! the engine or by a fixed, hand-written list in tests.

use trellis_engine::{estimated_case_count, generate, EngineError, Strategy};
use trellis_space::{ParameterSpace, TestCase};

/// Abstract producer of an ordered test-case list.
pub trait CaseSource: Send {
    /// Number of columns in every produced case.
    fn arity(&self) -> usize;

    /// Produce the full case list. Deterministic: repeated calls yield the
    /// identical list.
    fn cases(&self) -> Result<Vec<TestCase>, EngineError>;
}

/// A case source backed by the generation engine.
pub struct SpaceSource {
    space: ParameterSpace,
    strategy: Strategy,
    budget: crate::limits::CaseBudget,
}

impl SpaceSource {
    pub fn new(space: ParameterSpace, strategy: Strategy) -> Self {
        Self {
            space,
            strategy,
            budget: crate::limits::CaseBudget::default(),
        }
    }

    pub fn with_budget(mut self, budget: crate::limits::CaseBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl CaseSource for SpaceSource {
    fn arity(&self) -> usize {
        self.space.len()
    }

    fn cases(&self) -> Result<Vec<TestCase>, EngineError> {
        let estimate = estimated_case_count(&self.space, self.strategy);
        crate::limits::check_budget(estimate, &self.budget)?;
        generate(&self.space, self.strategy)
    }
}

/// A predefined case list: the runner-side analogue of a hand-written
/// parameter table, and the mock of choice in tests.
pub struct FixedSource {
    arity: usize,
    cases: Vec<TestCase>,
}

impl FixedSource {
    pub fn new(arity: usize, cases: Vec<TestCase>) -> Self {
        Self { arity, cases }
    }
}

impl CaseSource for FixedSource {
    fn arity(&self) -> usize {
        self.arity
    }

    fn cases(&self) -> Result<Vec<TestCase>, EngineError> {
        Ok(self.cases.clone())
    }
}
