//! Full cross-product enumeration.
//!
//! Tuples come out in odometer order: the first parameter varies slowest and
//! the last varies fastest. This is the all-combinations strategy and also
//! seeds the pairwise engine with the cross product of its two seed columns.

use trellis_space::{ParameterSpace, SpaceError, TestCase};

/// Lazy odometer over value *indices* for a list of domain sizes.
///
/// Yields one `Vec<usize>` per combination; position i ranges over
/// `0..cardinalities[i]`. Cloning restarts the walk from the beginning.
#[derive(Debug, Clone)]
pub struct IndexProduct {
    cardinalities: Vec<usize>,
    odometer: Vec<usize>,
    done: bool,
}

impl IndexProduct {
    /// An empty cardinality list or a zero cardinality yields no combinations.
    pub fn new(cardinalities: &[usize]) -> Self {
        let done = cardinalities.is_empty() || cardinalities.contains(&0);
        Self {
            cardinalities: cardinalities.to_vec(),
            odometer: vec![0; cardinalities.len()],
            done,
        }
    }
}

impl Iterator for IndexProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.odometer.clone();
        // Advance with the last position fastest.
        self.done = true;
        for i in (0..self.odometer.len()).rev() {
            self.odometer[i] += 1;
            if self.odometer[i] < self.cardinalities[i] {
                self.done = false;
                break;
            }
            self.odometer[i] = 0;
        }
        Some(current)
    }
}

/// Lazy iterator over the full cross product of a parameter space.
///
/// A pure function of its input: no internal mutation survives a clone, so a
/// cloned iterator restarts from the first tuple.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a> {
    space: &'a ParameterSpace,
    indices: IndexProduct,
}

impl<'a> CartesianProduct<'a> {
    /// Rejects an empty space or any parameter with an empty domain.
    pub fn new(space: &'a ParameterSpace) -> Result<Self, SpaceError> {
        space.validate()?;
        Ok(Self {
            space,
            indices: IndexProduct::new(&space.cardinalities()),
        })
    }
}

impl Iterator for CartesianProduct<'_> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        let indices = self.indices.next()?;
        let values = self
            .space
            .parameters
            .iter()
            .zip(&indices)
            .map(|(param, &idx)| param.values[idx].clone())
            .collect();
        Some(TestCase::new(values))
    }
}

/// The all-combinations strategy: every distinct tuple, exactly once.
pub fn exhaustive(space: &ParameterSpace) -> Result<Vec<TestCase>, SpaceError> {
    Ok(CartesianProduct::new(space)?.collect())
}
