//! The all-values strategy: cover every value of every parameter at least
//! once with the minimum number of cases.
//!
//! Output length equals the largest domain cardinality M. Case t takes
//! column i from `values[t mod cardinality(i)]`: the longest domain is
//! walked exactly once while shorter domains cycle round-robin.

use trellis_space::{ParameterSpace, SpaceError, TestCase};

/// Produce the minimal case list in which every declared value appears in
/// its own column at least once.
pub fn cover_all_values(space: &ParameterSpace) -> Result<Vec<TestCase>, SpaceError> {
    space.validate()?;
    let height = space.max_cardinality();
    let cases = (0..height)
        .map(|t| {
            let values = space
                .parameters
                .iter()
                .map(|param| param.values[t % param.cardinality()].clone())
                .collect();
            TestCase::new(values)
        })
        .collect();
    Ok(cases)
}
