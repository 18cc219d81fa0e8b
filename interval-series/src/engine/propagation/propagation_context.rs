use crate::basic_types::PropagationOutcome;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;

/// The view a propagator has on the [`DomainStore`] while it runs.
///
/// It keeps track of whether the propagator narrowed any domain, so that propagators themselves
/// only need to report failure.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    domains: &'a mut DomainStore,
    num_narrowings_at_start: u64,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(domains: &'a mut DomainStore) -> Self {
        let num_narrowings_at_start = domains.num_narrowings();
        PropagationContextMut {
            domains,
            num_narrowings_at_start,
        }
    }

    pub(crate) fn outcome(&self) -> PropagationOutcome {
        if self.domains.num_narrowings() > self.num_narrowings_at_start {
            PropagationOutcome::Narrowed
        } else {
            PropagationOutcome::NoChange
        }
    }

    /// The number of effective narrowings on the store since its creation.
    pub(crate) fn num_narrowings(&self) -> u64 {
        self.domains.num_narrowings()
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.domains.lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.domains.upper_bound(var)
    }

    pub(crate) fn value_of(&self, var: DomainId) -> Option<i32> {
        self.domains.value_of(var)
    }

    pub(crate) fn set_lower_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.domains.tighten_lower_bound(var, bound)
    }

    pub(crate) fn set_upper_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.domains.tighten_upper_bound(var, bound)
    }

    pub(crate) fn narrow_to(
        &mut self,
        var: DomainId,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.domains.narrow_to(var, lower_bound, upper_bound)
    }

    pub(crate) fn remove_range(
        &mut self,
        var: DomainId,
        from: i32,
        to: i32,
    ) -> Result<(), EmptyDomain> {
        self.domains.exclude_range(var, from, to)
    }
}
