//! A minimal harness for testing a single propagator against a set of domains.
#![cfg(test)]

use crate::basic_types::PropagationStatus;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;
use crate::propagators::Propagator;

#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    domains: DomainStore,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.domains.grow(lower_bound, upper_bound)
    }

    /// Runs `propagator` on the current domains until it reaches its own fixpoint.
    pub(crate) fn new_propagator(
        &mut self,
        propagator: Propagator,
    ) -> Result<Propagator, EmptyDomain> {
        let _ = self.propagate(&propagator)?;
        Ok(propagator)
    }

    pub(crate) fn propagate(&mut self, propagator: &Propagator) -> PropagationStatus {
        propagator.propagate(&mut self.domains)
    }

    pub(crate) fn contains(&self, var: DomainId, value: i32) -> bool {
        self.domains.contains(var, value)
    }

    pub(crate) fn domain_size(&self, var: DomainId) -> u64 {
        self.domains.domain_size(var)
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lower_bound: i32, upper_bound: i32) {
        let actual_lower_bound = self.domains.lower_bound(var);
        let actual_upper_bound = self.domains.upper_bound(var);

        assert_eq!(
            (lower_bound, upper_bound),
            (actual_lower_bound, actual_upper_bound),
            "The expected bounds [{lower_bound}..{upper_bound}] did not match the actual bounds [{actual_lower_bound}..{actual_upper_bound}]"
        );
    }
}
