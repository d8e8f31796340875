//! The all-pairs strategy: near-minimal pairwise covering arrays.
//!
//! Builds a case list in which every 2-way value combination across every
//! pair of parameters appears at least once. Exact minimization is NP-hard;
//! this module uses a deterministic constructive heuristic that grows the
//! array one parameter at a time:
//!
//! 1. Seed with the full cross product of the two largest-cardinality
//!    parameters. Every pair between them is covered by construction, and
//!    the seed size (their cardinality product) is a lower bound on any
//!    pairwise covering array for the space.
//! 2. For each remaining parameter, in declared order:
//!    - **horizontal growth**: extend every existing row with the value that
//!      covers the most still-uncovered pairs against the columns already in
//!      that row, ties broken by earliest domain position;
//!    - **vertical growth**: pack the pairs that horizontal growth missed
//!      into as few new rows as possible, first-fit in bookkeeping order;
//!      holes left in a new row take the owning parameter's first value and
//!      any pairs the finished row happens to realize are marked covered.
//! 3. Re-project all columns back to the declared parameter order.
//!
//! After each parameter is placed, every pair among the placed parameters is
//! covered; on termination that loop invariant gives full pairwise coverage.
//! Every tie-break is total, so identical spaces yield identical output.

use std::collections::BTreeSet;

use trellis_space::{ParameterSpace, SpaceError, TestCase};

use crate::cartesian::IndexProduct;

/// One 2-way requirement during construction: column `a` (construction
/// order) must take its `av`-th value in some row where column `b` takes its
/// `bv`-th value. Always `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PairRequirement {
    a: usize,
    av: usize,
    b: usize,
    bv: usize,
}

/// Incremental coverage bookkeeping over construction-order columns.
///
/// The requirement set lives in a `BTreeSet` so vertical growth walks it in
/// a deterministic order; requirements are removed as rows cover them and
/// the set is never re-derived from the rows.
#[derive(Debug, Default)]
struct PairTracker {
    uncovered: BTreeSet<PairRequirement>,
}

impl PairTracker {
    /// Register every requirement between the new column `k` and the columns
    /// before it.
    fn open_column(&mut self, cardinalities: &[usize], k: usize) {
        for a in 0..k {
            for av in 0..cardinalities[a] {
                for bv in 0..cardinalities[k] {
                    self.uncovered.insert(PairRequirement { a, av, b: k, bv });
                }
            }
        }
    }

    /// How many uncovered requirements assigning value `v` to column `k`
    /// would satisfy in this row.
    fn gain(&self, row: &[usize], k: usize, v: usize) -> usize {
        (0..k)
            .filter(|&a| {
                self.uncovered.contains(&PairRequirement {
                    a,
                    av: row[a],
                    b: k,
                    bv: v,
                })
            })
            .count()
    }

    /// Mark every pair the completed row realizes against column `k` covered.
    fn cover_row(&mut self, row: &[usize], k: usize) {
        for a in 0..k {
            self.uncovered.remove(&PairRequirement {
                a,
                av: row[a],
                b: k,
                bv: row[k],
            });
        }
    }

    fn remove(&mut self, req: &PairRequirement) {
        self.uncovered.remove(req);
    }

    fn contains(&self, req: &PairRequirement) -> bool {
        self.uncovered.contains(req)
    }

    /// Snapshot of the remaining requirements, in set order.
    fn remaining(&self) -> Vec<PairRequirement> {
        self.uncovered.iter().copied().collect()
    }

    fn is_clear(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Construction order: the two largest-cardinality parameters first (ties by
/// declared position), then the remaining parameters in declared order.
fn construction_order(cardinalities: &[usize]) -> Vec<usize> {
    let mut by_card: Vec<usize> = (0..cardinalities.len()).collect();
    by_card.sort_by_key(|&i| (std::cmp::Reverse(cardinalities[i]), i));
    let seed = [by_card[0], by_card[1]];
    let mut order = seed.to_vec();
    order.extend((0..cardinalities.len()).filter(|i| !seed.contains(i)));
    order
}

/// Extend every existing row with a value for column `k`, greedily covering
/// as many uncovered pairs as possible per row.
fn horizontal_growth(
    rows: &mut [Vec<usize>],
    tracker: &mut PairTracker,
    cardinalities: &[usize],
    k: usize,
) {
    for row in rows.iter_mut() {
        let mut best = 0;
        let mut best_gain = tracker.gain(row, k, 0);
        for v in 1..cardinalities[k] {
            let gain = tracker.gain(row, k, v);
            // Strictly greater keeps the earliest value on ties.
            if gain > best_gain {
                best = v;
                best_gain = gain;
            }
        }
        row.push(best);
        tracker.cover_row(row, k);
    }
}

/// Cover the requirements horizontal growth missed by adding new rows,
/// packing compatible requirements into each row first-fit.
fn vertical_growth(
    rows: &mut Vec<Vec<usize>>,
    tracker: &mut PairTracker,
    k: usize,
) {
    let mut fresh: Vec<Vec<Option<usize>>> = Vec::new();
    for req in tracker.remaining() {
        if !tracker.contains(&req) {
            // Covered as a side effect of an earlier packing in this phase.
            continue;
        }
        let slot = fresh
            .iter_mut()
            .find(|row| row[k] == Some(req.bv) && row[req.a].is_none());
        match slot {
            Some(row) => row[req.a] = Some(req.av),
            None => {
                let mut row = vec![None; k + 1];
                row[req.a] = Some(req.av);
                row[k] = Some(req.bv);
                fresh.push(row);
            }
        }
        tracker.remove(&req);
    }
    for partial in fresh {
        // Unconstrained columns take the parameter's first value; the filled
        // row is then re-checked against the bookkeeping so incidental
        // coverage counts too.
        let row: Vec<usize> = partial.into_iter().map(|v| v.unwrap_or(0)).collect();
        tracker.cover_row(&row, k);
        rows.push(row);
    }
}

/// Produce a near-minimal pairwise covering array for the space.
///
/// Output length is at least the product of the two largest cardinalities.
/// A single-parameter space has no pairs; it yields one case per value.
pub fn cover_all_pairs(space: &ParameterSpace) -> Result<Vec<TestCase>, SpaceError> {
    space.validate()?;
    let n = space.len();
    if n == 1 {
        let param = &space.parameters[0];
        return Ok(param
            .values
            .iter()
            .map(|value| TestCase::new(vec![value.clone()]))
            .collect());
    }

    let declared = space.cardinalities();
    let order = construction_order(&declared);
    let cardinalities: Vec<usize> = order.iter().map(|&p| declared[p]).collect();

    // Seed: cross product of the two largest domains, odometer order.
    let mut rows: Vec<Vec<usize>> = IndexProduct::new(&cardinalities[..2]).collect();

    let mut tracker = PairTracker::default();
    for k in 2..n {
        tracker.open_column(&cardinalities, k);
        horizontal_growth(&mut rows, &mut tracker, &cardinalities, k);
        vertical_growth(&mut rows, &mut tracker, k);
        debug_assert!(tracker.is_clear());
    }

    // Re-project construction columns back to declared order.
    let cases = rows
        .iter()
        .map(|row| {
            let mut indices = vec![0; n];
            for (pos, &param) in order.iter().enumerate() {
                indices[param] = row[pos];
            }
            let values = space
                .parameters
                .iter()
                .zip(&indices)
                .map(|(param, &idx)| param.values[idx].clone())
                .collect();
            TestCase::new(values)
        })
        .collect();
    Ok(cases)
}

/// Lower bound on any pairwise covering array for the space: the product of
/// the two largest cardinalities (or the single cardinality when only one
/// parameter is declared).
pub fn pair_lower_bound(space: &ParameterSpace) -> u64 {
    let mut cards: Vec<u64> = space
        .parameters
        .iter()
        .map(|p| p.cardinality() as u64)
        .collect();
    cards.sort_unstable_by(|a, b| b.cmp(a));
    match cards.as_slice() {
        [] => 0,
        [only] => *only,
        [first, second, ..] => first.saturating_mul(*second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::check_pair_coverage;
    use trellis_space::{Parameter, Value};

    fn space_of(cardinalities: &[usize]) -> ParameterSpace {
        let parameters = cardinalities
            .iter()
            .enumerate()
            .map(|(i, &card)| {
                Parameter::new(
                    format!("p{i}"),
                    (0..card as i64).map(Value::Int).collect(),
                )
            })
            .collect();
        ParameterSpace::new(parameters)
    }

    fn assert_fully_covered(space: &ParameterSpace, cases: &[TestCase]) {
        let gaps = check_pair_coverage(space, cases);
        assert!(gaps.is_empty(), "uncovered pairs: {gaps:?}");
    }

    #[test]
    fn test_worked_example_2_4_3_4_is_17_rows() {
        let space = space_of(&[2, 4, 3, 4]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 17);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_two_parameters_degenerate_to_cross_product() {
        let space = space_of(&[2, 3]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 6);
        let unique: std::collections::HashSet<_> = cases.iter().collect();
        assert_eq!(unique.len(), 6);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_three_binary_parameters_take_four_rows() {
        let space = space_of(&[2, 2, 2]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 4);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_six_binary_parameters_stay_near_bound() {
        let space = space_of(&[2, 2, 2, 2, 2, 2]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 7);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_uniform_ternary_space() {
        let space = space_of(&[3, 3, 3, 3]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 10);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_mixed_space_meets_bound_exactly() {
        let space = space_of(&[5, 4, 3, 2, 2]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 20);
        assert_eq!(pair_lower_bound(&space), 20);
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_length_never_below_lower_bound() {
        for cards in [
            vec![2, 4, 3, 4],
            vec![3, 3],
            vec![4, 4, 4],
            vec![1, 2, 3],
            vec![2, 2, 2, 2, 2, 2],
        ] {
            let space = space_of(&cards);
            let cases = cover_all_pairs(&space).unwrap();
            assert!(cases.len() as u64 >= pair_lower_bound(&space));
        }
    }

    #[test]
    fn test_cardinality_one_parameters() {
        let space = space_of(&[1, 2, 3]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 6);
        assert_fully_covered(&space, &cases);
        for case in &cases {
            assert_eq!(case.values[0], Value::Int(0));
        }
    }

    #[test]
    fn test_single_parameter_yields_one_case_per_value() {
        let space = space_of(&[3]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 3);
    }

    #[test]
    fn test_single_parameter_of_one_value() {
        let space = space_of(&[1]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let space = space_of(&[2, 4, 3, 4]);
        let first = cover_all_pairs(&space).unwrap();
        let second = cover_all_pairs(&space).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_columns_stay_in_declared_order() {
        // Distinct value kinds per parameter so a column swap cannot hide.
        let space = ParameterSpace::new(vec![
            Parameter::new("flag", vec![Value::Bool(false), Value::Bool(true)]),
            Parameter::new(
                "coupon",
                vec![Value::Null, "WELCOME10".into(), "VIP".into(), "EXPIRED".into()],
            ),
            Parameter::new("retries", vec![Value::Int(0), Value::Int(1), Value::Int(5)]),
            Parameter::new(
                "currency",
                vec!["EUR".into(), "USD".into(), "GBP".into(), "JPY".into()],
            ),
        ]);
        let cases = cover_all_pairs(&space).unwrap();
        assert_eq!(cases.len(), 17);
        for case in &cases {
            assert!(space.parameters[0].values.contains(&case.values[0]));
            assert!(space.parameters[1].values.contains(&case.values[1]));
            assert!(space.parameters[2].values.contains(&case.values[2]));
            assert!(space.parameters[3].values.contains(&case.values[3]));
        }
        assert_fully_covered(&space, &cases);
    }

    #[test]
    fn test_construction_order_two_largest_then_declared() {
        assert_eq!(construction_order(&[2, 4, 3, 4]), vec![1, 3, 0, 2]);
        assert_eq!(construction_order(&[5, 5, 2]), vec![0, 1, 2]);
        assert_eq!(construction_order(&[2, 3, 5, 4]), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_pair_lower_bound() {
        assert_eq!(pair_lower_bound(&space_of(&[2, 4, 3, 4])), 16);
        assert_eq!(pair_lower_bound(&space_of(&[3])), 3);
        assert_eq!(pair_lower_bound(&space_of(&[7, 2])), 14);
    }

    #[test]
    fn test_rejects_invalid_space() {
        assert_eq!(
            cover_all_pairs(&ParameterSpace::new(vec![])),
            Err(SpaceError::EmptySpace)
        );
    }
}
