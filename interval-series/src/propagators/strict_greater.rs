use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::engine::domains::DomainId;
use crate::engine::propagation::PropagationContextMut;

/// Propagator for `greater > smaller`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrictGreaterPropagator {
    pub(crate) greater: DomainId,
    pub(crate) smaller: DomainId,
}

impl StrictGreaterPropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let smaller_lb = context.lower_bound(self.smaller);
        context.set_lower_bound(self.greater, smaller_lb + 1)?;

        let greater_ub = context.upper_bound(self.greater);
        context.set_upper_bound(self.smaller, greater_ub - 1)
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        solution.get_integer_value(self.greater) > solution.get_integer_value(self.smaller)
    }
}
