pub mod limits;
pub mod source;
pub mod suite;

pub use limits::CaseBudget;
pub use source::{CaseSource, FixedSource, SpaceSource};
pub use suite::{ProgressCounter, RunError, SuiteRegistry, SuiteReport};
