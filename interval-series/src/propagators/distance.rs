use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::engine::domains::DomainId;
use crate::engine::propagation::PropagationContextMut;

/// Propagator for `|a - b| = distance`.
///
/// The distance is bounded by the absolute range of `a - b`, computed from the corner differences
/// of the bounds of `a` and `b`. In the other direction, each side is restricted to lie within
/// `upper_bound(distance)` of the other side; once the order of `a` and `b` is known the exact
/// linear bounds are used, and once one side is fixed the values closer to it than
/// `lower_bound(distance)` are removed from the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistancePropagator {
    pub(crate) a: DomainId,
    pub(crate) b: DomainId,
    pub(crate) distance: DomainId,
}

impl DistancePropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let difference_lb = context.lower_bound(self.a) - context.upper_bound(self.b);
        let difference_ub = context.upper_bound(self.a) - context.lower_bound(self.b);

        let (distance_lb, distance_ub) = if difference_lb >= 0 {
            (difference_lb, difference_ub)
        } else if difference_ub <= 0 {
            (-difference_ub, -difference_lb)
        } else {
            (0, i32::max(-difference_lb, difference_ub))
        };
        context.narrow_to(self.distance, distance_lb, distance_ub)?;

        self.propagate_side(context, self.a, self.b)?;
        self.propagate_side(context, self.b, self.a)?;

        if context.lower_bound(self.a) >= context.upper_bound(self.b) {
            // a - b = distance
            self.propagate_ordered(context, self.a, self.b)?;
        } else if context.upper_bound(self.a) <= context.lower_bound(self.b) {
            // b - a = distance
            self.propagate_ordered(context, self.b, self.a)?;
        }

        Ok(())
    }

    /// Restricts `side` given the bounds of `other` and of the distance.
    fn propagate_side(
        &self,
        context: &mut PropagationContextMut,
        side: DomainId,
        other: DomainId,
    ) -> PropagationStatusCP {
        let distance_lb = context.lower_bound(self.distance);
        let distance_ub = context.upper_bound(self.distance);

        context.narrow_to(
            side,
            context.lower_bound(other) - distance_ub,
            context.upper_bound(other) + distance_ub,
        )?;

        if let Some(other_value) = context.value_of(other) {
            if distance_lb > 0 {
                context.remove_range(
                    side,
                    other_value - distance_lb + 1,
                    other_value + distance_lb - 1,
                )?;
            }
        }

        Ok(())
    }

    /// Propagates `larger - smaller = distance` when the order of the two sides is known.
    fn propagate_ordered(
        &self,
        context: &mut PropagationContextMut,
        larger: DomainId,
        smaller: DomainId,
    ) -> PropagationStatusCP {
        context.narrow_to(
            larger,
            context.lower_bound(smaller) + context.lower_bound(self.distance),
            context.upper_bound(smaller) + context.upper_bound(self.distance),
        )?;
        context.narrow_to(
            smaller,
            context.lower_bound(larger) - context.upper_bound(self.distance),
            context.upper_bound(larger) - context.lower_bound(self.distance),
        )
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        (solution.get_integer_value(self.a) - solution.get_integer_value(self.b)).abs()
            == solution.get_integer_value(self.distance)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::test_solver::TestSolver;
    use crate::propagators::Propagator;

    #[test]
    fn distance_is_bounded_by_the_corner_differences() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(5, 6);
        let distance = solver.new_variable(0, 100);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(distance, 2, 6);
    }

    #[test]
    fn overlapping_sides_allow_distance_zero() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 9);
        let b = solver.new_variable(2, 4);
        let distance = solver.new_variable(0, 100);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(distance, 0, 7);
    }

    #[test]
    fn sides_are_restricted_by_the_upper_bound_of_the_distance() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 20);
        let b = solver.new_variable(8, 10);
        let distance = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(a, 6, 12);
    }

    #[test]
    fn fixed_side_and_distance_leave_two_values() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 10);
        let b = solver.new_variable(5, 5);
        let distance = solver.new_variable(3, 3);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(a, 2, 8);
        assert_eq!(2, solver.domain_size(a));
    }

    #[test]
    fn ordered_sides_use_exact_bounds() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(5, 9);
        let b = solver.new_variable(0, 3);
        let distance = solver.new_variable(7, 8);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(a, 7, 9);
        solver.assert_bounds(b, 0, 2);
    }

    #[test]
    fn fixed_sides_fix_the_distance() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(4, 4);
        let distance = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(Propagator::distance(a, b, distance))
            .expect("no empty domains");

        solver.assert_bounds(distance, 3, 3);
    }

    #[test]
    fn equal_values_with_positive_distance_are_inconsistent() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(2, 2);
        let distance = solver.new_variable(1, 3);

        assert!(solver
            .new_propagator(Propagator::distance(a, b, distance))
            .is_err());
    }
}
