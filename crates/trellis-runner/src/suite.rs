//! Named suites of generated cases and the callback-driven run loop.
//!
//! A suite is a registered [`CaseSource`]; running one drives a caller
//! callback once per case, threading an explicit progress counter. The
//! counter belongs to the caller, not the registry: progress accounting is
//! state the caller opted into, never process-wide.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use trellis_engine::EngineError;
use trellis_space::TestCase;

use crate::source::CaseSource;

/// Caller-owned count of executed cases, shared across suite runs at the
/// caller's discretion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgressCounter {
    executed: u64,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.executed += 1;
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }
}

/// Outcome of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub cases: usize,
    pub failures: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("no suite registered under '{0}'")]
    UnknownSuite(String),

    #[error("case generation failed: {0}")]
    Generation(#[from] EngineError),
}

/// Registry of named case sources.
pub struct SuiteRegistry {
    suites: Mutex<HashMap<String, Box<dyn CaseSource>>>,
}

impl SuiteRegistry {
    pub fn new() -> Self {
        Self {
            suites: Mutex::new(HashMap::new()),
        }
    }

    /// Register a suite, replacing any previous source under the same name.
    pub fn register(&self, name: impl Into<String>, source: Box<dyn CaseSource>) {
        self.suites.lock().unwrap().insert(name.into(), source);
    }

    /// Registered suite names, sorted for stable output.
    pub fn suite_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.suites.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.suites.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.lock().unwrap().is_empty()
    }

    /// Run a suite: generate its cases, then invoke `check` once per case in
    /// generation order. A `false` return counts as a failure; the run always
    /// continues through the full list. The lock is held only while the case
    /// list is produced, never across callbacks.
    pub fn run(
        &self,
        name: &str,
        counter: &mut ProgressCounter,
        check: &mut dyn FnMut(&TestCase) -> bool,
    ) -> Result<SuiteReport, RunError> {
        let cases = {
            let suites = self.suites.lock().unwrap();
            let source = suites
                .get(name)
                .ok_or_else(|| RunError::UnknownSuite(name.to_string()))?;
            source.cases()?
        };

        let mut failures = 0;
        for case in &cases {
            counter.tick();
            if !check(case) {
                failures += 1;
            }
        }

        Ok(SuiteReport {
            suite: name.to_string(),
            cases: cases.len(),
            failures,
        })
    }
}

impl Default for SuiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
