pub mod parse;
pub mod space;

pub use space::{Parameter, ParameterSpace, SpaceError, TestCase, Value};
