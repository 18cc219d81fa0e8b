//! The propagators available to a model.
//!
//! The set of constraint kinds is closed: a [`Propagator`] is one of a fixed number of variants,
//! each of which narrows the domains of the variables in its scope. Adding a constraint kind means
//! adding a variant.
mod absolute_value;
mod all_different;
mod distance;
mod linear_sum;
mod member;
mod strict_greater;

pub use absolute_value::AbsoluteValuePropagator;
pub use all_different::AllDifferentPropagator;
pub use distance::DistancePropagator;
pub use linear_sum::LinearSumPropagator;
pub use member::MemberPropagator;
pub use strict_greater::StrictGreaterPropagator;

use crate::basic_types::PropagationStatus;
use crate::basic_types::Solution;
use crate::engine::domains::DomainEvents;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContextMut;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Propagator {
    /// `|a - b| = distance`
    Distance(DistancePropagator),
    /// All variables take pairwise different values.
    AllDifferent(AllDifferentPropagator),
    /// `left + right = sum`
    Sum(LinearSumPropagator),
    /// `absolute = |signed|`
    AbsoluteValue(AbsoluteValuePropagator),
    /// `lower_bound <= variable <= upper_bound`
    Member(MemberPropagator),
    /// `greater > smaller`
    StrictGreater(StrictGreaterPropagator),
}

impl Propagator {
    pub fn distance(a: DomainId, b: DomainId, distance: DomainId) -> Propagator {
        Propagator::Distance(DistancePropagator { a, b, distance })
    }

    pub fn all_different(variables: impl Into<Box<[DomainId]>>) -> Propagator {
        Propagator::AllDifferent(AllDifferentPropagator {
            variables: variables.into(),
        })
    }

    pub fn sum(left: DomainId, right: DomainId, sum: DomainId) -> Propagator {
        Propagator::Sum(LinearSumPropagator { left, right, sum })
    }

    pub fn absolute_value(signed: DomainId, absolute: DomainId) -> Propagator {
        Propagator::AbsoluteValue(AbsoluteValuePropagator { signed, absolute })
    }

    pub fn member(variable: DomainId, lower_bound: i32, upper_bound: i32) -> Propagator {
        Propagator::Member(MemberPropagator {
            variable,
            lower_bound,
            upper_bound,
        })
    }

    pub fn strict_greater(greater: DomainId, smaller: DomainId) -> Propagator {
        Propagator::StrictGreater(StrictGreaterPropagator { greater, smaller })
    }

    pub fn name(&self) -> &str {
        match self {
            Propagator::Distance(_) => "Distance",
            Propagator::AllDifferent(_) => "AllDifferent",
            Propagator::Sum(_) => "Sum",
            Propagator::AbsoluteValue(_) => "AbsoluteValue",
            Propagator::Member(_) => "Member",
            Propagator::StrictGreater(_) => "StrictGreater",
        }
    }

    /// The variables this propagator reads and narrows, in declaration order.
    pub fn scope(&self) -> Vec<DomainId> {
        match self {
            Propagator::Distance(propagator) => {
                vec![propagator.a, propagator.b, propagator.distance]
            }
            Propagator::AllDifferent(propagator) => propagator.variables.to_vec(),
            Propagator::Sum(propagator) => vec![propagator.left, propagator.right, propagator.sum],
            Propagator::AbsoluteValue(propagator) => vec![propagator.signed, propagator.absolute],
            Propagator::Member(propagator) => vec![propagator.variable],
            Propagator::StrictGreater(propagator) => vec![propagator.greater, propagator.smaller],
        }
    }

    /// The events on the variables in the [`Propagator::scope`] after which this propagator has
    /// to run again.
    pub fn subscriptions(&self) -> DomainEvents {
        // All propagators only reason over bounds; interior removals never enable propagation.
        DomainEvents::BOUNDS
    }

    pub fn priority(&self) -> Priority {
        match self {
            Propagator::Member(_) | Propagator::StrictGreater(_) => Priority::High,
            Propagator::Distance(_) | Propagator::Sum(_) | Propagator::AbsoluteValue(_) => {
                Priority::Medium
            }
            Propagator::AllDifferent(_) => Priority::Low,
        }
    }

    /// Narrows the domains in the scope of this propagator until it reaches its own fixpoint.
    ///
    /// Every propagator is made idempotent by repeating its filtering until a pass no longer
    /// changes a domain, so the propagation engine does not need to re-enqueue a propagator
    /// because of its own changes.
    pub(crate) fn propagate(&self, domains: &mut DomainStore) -> PropagationStatus {
        let mut context = PropagationContextMut::new(domains);

        loop {
            let num_narrowings_before_pass = context.num_narrowings();

            match self {
                Propagator::Distance(propagator) => propagator.propagate(&mut context)?,
                Propagator::AllDifferent(propagator) => propagator.propagate(&mut context)?,
                Propagator::Sum(propagator) => propagator.propagate(&mut context)?,
                Propagator::AbsoluteValue(propagator) => propagator.propagate(&mut context)?,
                Propagator::Member(propagator) => propagator.propagate(&mut context)?,
                Propagator::StrictGreater(propagator) => propagator.propagate(&mut context)?,
            }

            if context.num_narrowings() == num_narrowings_before_pass {
                break;
            }
        }

        Ok(context.outcome())
    }

    /// Checks the constraint on a complete assignment.
    pub fn is_satisfied(&self, solution: &Solution) -> bool {
        match self {
            Propagator::Distance(propagator) => propagator.is_satisfied(solution),
            Propagator::AllDifferent(propagator) => propagator.is_satisfied(solution),
            Propagator::Sum(propagator) => propagator.is_satisfied(solution),
            Propagator::AbsoluteValue(propagator) => propagator.is_satisfied(solution),
            Propagator::Member(propagator) => propagator.is_satisfied(solution),
            Propagator::StrictGreater(propagator) => propagator.is_satisfied(solution),
        }
    }
}
