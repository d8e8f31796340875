pub mod all_values;
pub mod cartesian;
pub mod factory;
pub mod pairwise;
pub mod verify;

pub use factory::{estimated_case_count, generate, EngineError, Strategy};
