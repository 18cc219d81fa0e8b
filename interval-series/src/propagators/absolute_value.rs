use crate::basic_types::PropagationStatusCP;
use crate::basic_types::Solution;
use crate::engine::domains::DomainId;
use crate::engine::propagation::PropagationContextMut;

/// Propagator for `absolute = |signed|`, where `absolute` and `signed` are integer variables.
///
/// The propagator is bounds consistent wrt signed. That means that if `signed \in {-2, -1, 1, 2}`,
/// the propagator will not propagate `[absolute >= 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsoluteValuePropagator {
    pub(crate) signed: DomainId,
    pub(crate) absolute: DomainId,
}

impl AbsoluteValuePropagator {
    pub(crate) fn propagate(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        // The bound of absolute may be tightened further during propagation, but it is at least
        // zero at the root.
        context.set_lower_bound(self.absolute, 0)?;

        // Propagating absolute value can be broken into a few cases:
        // - `signed` is sign-fixed (i.e. `upper_bound <= 0` or `lower_bound >= 0`), in which case
        //   the bounds of `signed` can be propagated to `absolute` (taking care of swapping bounds
        //   when the `signed` is negative).
        // - `signed` is not sign-fixed (i.e. `lower_bound <= 0` and `upper_bound >= 0`), in which
        //   case the lower bound of `absolute` cannot be tightened without looking into specific
        //   domain values for `signed`, which we don't do.
        let signed_lb = context.lower_bound(self.signed);
        let signed_ub = context.upper_bound(self.signed);

        let signed_absolute_ub = i32::max(signed_lb.abs(), signed_ub.abs());
        context.set_upper_bound(self.absolute, signed_absolute_ub)?;

        if signed_lb > 0 {
            context.set_lower_bound(self.absolute, signed_lb)?;
        } else if signed_ub < 0 {
            context.set_lower_bound(self.absolute, signed_ub.abs())?;
        }

        let absolute_ub = context.upper_bound(self.absolute);
        let absolute_lb = context.lower_bound(self.absolute);
        context.narrow_to(self.signed, -absolute_ub, absolute_ub)?;

        if signed_ub <= 0 {
            context.set_upper_bound(self.signed, -absolute_lb)?;
        } else if signed_lb >= 0 {
            context.set_lower_bound(self.signed, absolute_lb)?;
        } else if absolute_lb > 0 {
            // Zero and everything closer to it than the lower bound of `absolute` is excluded.
            context.remove_range(self.signed, -absolute_lb + 1, absolute_lb - 1)?;
        }

        Ok(())
    }

    pub(crate) fn is_satisfied(&self, solution: &Solution) -> bool {
        solution.get_integer_value(self.signed).abs() == solution.get_integer_value(self.absolute)
    }
}
