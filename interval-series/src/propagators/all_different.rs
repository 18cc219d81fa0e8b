//! Bounds consistent propagation for the all-different constraint.
//!
//! The implementation follows "A fast and simple algorithm for bounds consistency of the
//! alldifferent constraint - Lopez-Ortiz, Quimper, Tromp and van Beek (2003)". The bounds of all
//! variables are ranked, after which Hall intervals are detected in a single sweep over the
//! variables sorted by upper bound (to tighten lower bounds) and a single sweep over the variables
//! sorted by lower bound (to tighten upper bounds). Union-find style path compression over the
//! ranked bounds keeps both sweeps near-linear.
use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::containers::HashSet;
use crate::engine::domains::DomainId;
use crate::engine::domains::EmptyDomain;
use crate::engine::propagation::PropagationContextMut;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllDifferentPropagator {
    pub(crate) variables: Box<[DomainId]>,
}

/// The bounds of a single variable together with their rank in the sorted list of all bounds.
#[derive(Clone, Copy, Debug)]
struct RankedInterval {
    lower_bound: i32,
    upper_bound: i32,
    min_rank: usize,
    max_rank: usize,
}

impl AllDifferentPropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let num_variables = self.variables.len();
        if num_variables <= 1 {
            return Ok(());
        }

        let mut intervals = self
            .variables
            .iter()
            .map(|&variable| RankedInterval {
                lower_bound: context.lower_bound(variable),
                upper_bound: context.upper_bound(variable),
                min_rank: 0,
                max_rank: 0,
            })
            .collect::<Vec<_>>();

        let mut min_sorted = (0..num_variables).collect::<Vec<_>>();
        min_sorted.sort_by_key(|&index| intervals[index].lower_bound);
        let mut max_sorted = (0..num_variables).collect::<Vec<_>>();
        max_sorted.sort_by_key(|&index| intervals[index].upper_bound);

        let bounds = rank_bounds(&mut intervals, &min_sorted, &max_sorted);

        self.filter_lower_bounds(context, &intervals, &max_sorted, &bounds)?;
        self.filter_upper_bounds(context, &intervals, &min_sorted, &bounds)
    }

    /// Pushes lower bounds above the Hall intervals found while sweeping over the variables in
    /// order of increasing upper bound.
    fn filter_lower_bounds(
        &self,
        context: &mut PropagationContextMut,
        intervals: &[RankedInterval],
        max_sorted: &[usize],
        bounds: &[i32],
    ) -> PropagationStatusCP {
        let num_bounds = bounds.len() - 2;
        // Tree links, Hall interval links and the capacities between consecutive bounds.
        let mut tree = vec![0; bounds.len()];
        let mut hall = vec![0; bounds.len()];
        let mut capacity = vec![0; bounds.len()];

        for i in 1..=num_bounds + 1 {
            tree[i] = i - 1;
            hall[i] = i - 1;
            capacity[i] = bounds[i] - bounds[i - 1];
        }

        for &index in max_sorted {
            let x = intervals[index].min_rank;
            let y = intervals[index].max_rank;

            let mut z = path_max(&tree, x + 1);
            let j = tree[z];

            capacity[z] -= 1;
            if capacity[z] == 0 {
                tree[z] = z + 1;
                z = path_max(&tree, tree[z]);
                tree[z] = j;
            }
            path_set(&mut tree, x + 1, z, z);

            if capacity[z] < bounds[z] - bounds[y] {
                return Err(EmptyDomain);
            }

            if hall[x] > x {
                let w = path_max(&hall, hall[x]);
                context.set_lower_bound(self.variables[index], bounds[w])?;
                path_set(&mut hall, x, w, w);
            }

            if capacity[z] == bounds[z] - bounds[y] {
                let start = hall[y];
                path_set(&mut hall, start, j - 1, y);
                hall[y] = j - 1;
            }
        }

        Ok(())
    }

    /// The mirror image of [`Self::filter_lower_bounds`], sweeping over the variables in order of
    /// decreasing lower bound.
    fn filter_upper_bounds(
        &self,
        context: &mut PropagationContextMut,
        intervals: &[RankedInterval],
        min_sorted: &[usize],
        bounds: &[i32],
    ) -> PropagationStatusCP {
        let num_bounds = bounds.len() - 2;
        let mut tree = vec![0; bounds.len()];
        let mut hall = vec![0; bounds.len()];
        let mut capacity = vec![0; bounds.len()];

        for i in 0..=num_bounds {
            tree[i] = i + 1;
            hall[i] = i + 1;
            capacity[i] = bounds[i + 1] - bounds[i];
        }

        for &index in min_sorted.iter().rev() {
            let x = intervals[index].max_rank;
            let y = intervals[index].min_rank;

            let mut z = path_min(&tree, x - 1);
            let j = tree[z];

            capacity[z] -= 1;
            if capacity[z] == 0 {
                tree[z] = z - 1;
                z = path_min(&tree, tree[z]);
                tree[z] = j;
            }
            path_set(&mut tree, x - 1, z, z);

            if capacity[z] < bounds[y] - bounds[z] {
                return Err(EmptyDomain);
            }

            if hall[x] < x {
                let w = path_min(&hall, hall[x]);
                context.set_upper_bound(self.variables[index], bounds[w] - 1)?;
                path_set(&mut hall, x, w, w);
            }

            if capacity[z] == bounds[y] - bounds[z] {
                let start = hall[y];
                path_set(&mut hall, start, j + 1, y);
                hall[y] = j + 1;
            }
        }

        Ok(())
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        let mut seen: HashSet<i32> = HashSet::default();
        self.variables
            .iter()
            .all(|&variable| seen.insert(solution.get_integer_value(variable)))
    }
}

/// Merges the lower bounds and the (exclusive) upper bounds of all intervals into one sorted list
/// of distinct values, and records for every interval the rank of both its bounds in that list.
///
/// The returned list is padded with a sentinel on both sides, the sentinels are far enough from
/// the real bounds that they never become part of a Hall interval.
fn rank_bounds(
    intervals: &mut [RankedInterval],
    min_sorted: &[usize],
    max_sorted: &[usize],
) -> Vec<i32> {
    let num_intervals = intervals.len();
    let mut bounds = Vec::with_capacity(2 * num_intervals + 2);

    let mut min = intervals[min_sorted[0]].lower_bound;
    let mut max = intervals[max_sorted[0]].upper_bound + 1;
    let mut last = min - 2;
    bounds.push(last);

    let mut i = 0;
    let mut j = 0;
    loop {
        if i < num_intervals && min <= max {
            if min != last {
                last = min;
                bounds.push(last);
            }
            intervals[min_sorted[i]].min_rank = bounds.len() - 1;

            i += 1;
            if i < num_intervals {
                min = intervals[min_sorted[i]].lower_bound;
            }
        } else {
            if max != last {
                last = max;
                bounds.push(last);
            }
            intervals[max_sorted[j]].max_rank = bounds.len() - 1;

            j += 1;
            if j == num_intervals {
                break;
            }
            max = intervals[max_sorted[j]].upper_bound + 1;
        }
    }

    bounds.push(last + 2);
    bounds
}

fn path_set(links: &mut [usize], start: usize, end: usize, to: usize) {
    let mut next = start;
    while next != end {
        let current = next;
        next = links[current];
        links[current] = to;
    }
}

fn path_min(links: &[usize], mut index: usize) -> usize {
    while links[index] < index {
        index = links[index];
    }
    index
}

fn path_max(links: &[usize], mut index: usize) -> usize {
    while links[index] > index {
        index = links[index];
    }
    index
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Solution;
    use crate::engine::domains::DomainStore;
    use crate::engine::test_solver::TestSolver;
    use crate::propagators::Propagator;

    #[test]
    fn fixed_variable_pushes_bounds_of_the_others() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 0);
        let y = solver.new_variable(0, 3);
        let z = solver.new_variable(-2, 0);

        let _ = solver
            .new_propagator(Propagator::all_different(vec![x, y, z]))
            .expect("no empty domains");

        solver.assert_bounds(y, 1, 3);
        solver.assert_bounds(z, -2, -1);
    }

    #[test]
    fn hall_interval_is_removed_from_other_variables() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 2);
        let y = solver.new_variable(1, 2);
        let z = solver.new_variable(1, 4);
        let w = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(Propagator::all_different(vec![x, y, z, w]))
            .expect("no empty domains");

        solver.assert_bounds(z, 3, 4);
        solver.assert_bounds(w, 0, 0);
    }

    #[test]
    fn nested_hall_intervals_tighten_upper_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 4);
        let y = solver.new_variable(3, 4);
        let z = solver.new_variable(2, 4);
        let w = solver.new_variable(0, 4);

        let _ = solver
            .new_propagator(Propagator::all_different(vec![x, y, z, w]))
            .expect("no empty domains");

        solver.assert_bounds(z, 2, 2);
        solver.assert_bounds(w, 0, 1);
    }

    #[test]
    fn pigeonhole_is_detected() {
        let mut solver = TestSolver::default();
        let variables = (0..4).map(|_| solver.new_variable(0, 2)).collect::<Vec<_>>();

        let result = solver.new_propagator(Propagator::all_different(variables));

        assert!(result.is_err());
    }

    #[test]
    fn equal_fixed_values_are_detected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(5, 5);
        let y = solver.new_variable(5, 5);

        assert!(solver
            .new_propagator(Propagator::all_different(vec![x, y]))
            .is_err());
    }

    #[test]
    fn no_pruning_without_hall_intervals() {
        let mut solver = TestSolver::default();
        let variables = (0..5).map(|_| solver.new_variable(0, 4)).collect::<Vec<_>>();

        let _ = solver
            .new_propagator(Propagator::all_different(variables.clone()))
            .expect("no empty domains");

        for variable in variables {
            solver.assert_bounds(variable, 0, 4);
        }
    }

    #[test]
    fn permutation_is_fully_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 0);
        let y = solver.new_variable(0, 1);
        let z = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(Propagator::all_different(vec![x, y, z]))
            .expect("no empty domains");

        solver.assert_bounds(y, 1, 1);
        solver.assert_bounds(z, 2, 2);
    }

    #[test]
    fn repeated_value_is_not_satisfied() {
        let mut domains = DomainStore::default();
        let x = domains.grow(1, 1);
        let y = domains.grow(2, 2);
        let z = domains.grow(1, 1);
        let solution = Solution::from_fixed_domains(&domains);

        assert!(Propagator::all_different(vec![x, y]).is_satisfied(&solution));
        assert!(!Propagator::all_different(vec![x, y, z]).is_satisfied(&solution));
    }
}
