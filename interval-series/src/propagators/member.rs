use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::engine::domains::DomainId;
use crate::engine::propagation::PropagationContextMut;

/// Propagator for `lower_bound <= variable <= upper_bound`.
///
/// Domains only narrow, so this propagator has nothing left to do after it first ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberPropagator {
    pub(crate) variable: DomainId,
    pub(crate) lower_bound: i32,
    pub(crate) upper_bound: i32,
}

impl MemberPropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        context.narrow_to(self.variable, self.lower_bound, self.upper_bound)
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        (self.lower_bound..=self.upper_bound).contains(&solution.get_integer_value(self.variable))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::test_solver::TestSolver;
    use crate::propagators::Propagator;

    #[test]
    fn domain_is_restricted_to_the_interval() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(-20, 20);

        let _ = solver
            .new_propagator(Propagator::member(x, 1, 9))
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 9);
    }

    #[test]
    fn disjoint_interval_is_inconsistent() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(10, 20);

        assert!(solver.new_propagator(Propagator::member(x, 1, 9)).is_err());
    }
}
