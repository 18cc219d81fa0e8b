use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::engine::domains::DomainId;
use crate::engine::propagation::PropagationContextMut;

/// Bounds propagator for `left + right = sum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearSumPropagator {
    pub(crate) left: DomainId,
    pub(crate) right: DomainId,
    pub(crate) sum: DomainId,
}

impl LinearSumPropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        context.narrow_to(
            self.sum,
            context.lower_bound(self.left) + context.lower_bound(self.right),
            context.upper_bound(self.left) + context.upper_bound(self.right),
        )?;

        context.narrow_to(
            self.left,
            context.lower_bound(self.sum) - context.upper_bound(self.right),
            context.upper_bound(self.sum) - context.lower_bound(self.right),
        )?;

        context.narrow_to(
            self.right,
            context.lower_bound(self.sum) - context.upper_bound(self.left),
            context.upper_bound(self.sum) - context.lower_bound(self.left),
        )
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        solution.get_integer_value(self.left) + solution.get_integer_value(self.right)
            == solution.get_integer_value(self.sum)
    }
}
