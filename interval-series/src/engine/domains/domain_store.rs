use enumset::EnumSet;

use super::DomainEvent;
use super::DomainId;
use super::IntegerDomain;
use crate::containers::KeyedVec;
use crate::solver_assert_simple;

/// Signals that an operation on the [`DomainStore`] would have emptied a domain.
///
/// This is the expected way for a branch of the search to fail; it is recovered by backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

/// Owns the domains of all variables.
///
/// Domains are only ever narrowed. Every effective narrowing is appended to an event log which
/// the propagation engine drains to decide which propagators need to run again. Backtracking is
/// done by taking a [`DomainSnapshot`] before a decision and restoring it afterwards.
#[derive(Clone, Debug, Default)]
pub struct DomainStore {
    domains: KeyedVec<DomainId, IntegerDomain>,
    events: Vec<(DomainId, EnumSet<DomainEvent>)>,
    /// The number of narrowing operations which changed a domain.
    num_narrowings: u64,
}

/// A copy of every domain in a [`DomainStore`] at one point of the search.
#[derive(Clone, Debug)]
pub struct DomainSnapshot {
    domains: KeyedVec<DomainId, IntegerDomain>,
}

impl DomainSnapshot {
    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }
}

impl DomainStore {
    /// Registers the domain `[lower_bound, upper_bound]` for a new variable.
    ///
    /// The caller is responsible for checking that the bounds are not inverted, see
    /// [`Solver::new_bounded_integer`](crate::Solver::new_bounded_integer).
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        solver_assert_simple!(
            lower_bound <= upper_bound,
            "cannot create a variable with an empty domain"
        );
        self.domains.push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.domains.keys()
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        domain_id.id() < self.num_domains() as u32
    }

    pub fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound()
    }

    pub fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound()
    }

    pub fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.domains[domain_id].is_fixed()
    }

    /// Returns the value of `domain_id` if it is fixed, [`None`] otherwise.
    pub fn value_of(&self, domain_id: DomainId) -> Option<i32> {
        let domain = &self.domains[domain_id];
        domain.is_fixed().then(|| domain.lower_bound())
    }

    pub fn domain_size(&self, domain_id: DomainId) -> u64 {
        self.domains[domain_id].size()
    }

    /// Iterates over the values which are still in the domain of `domain_id`, in increasing
    /// order.
    pub fn iterate_domain(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain_id].values()
    }

    pub fn all_fixed(&self) -> bool {
        self.domains.iter().all(IntegerDomain::is_fixed)
    }

    pub fn num_narrowings(&self) -> u64 {
        self.num_narrowings
    }

    pub fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let events = self.domains[domain_id].set_lower_bound(new_lower_bound)?;
        self.record(domain_id, events);
        Ok(())
    }

    pub fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let events = self.domains[domain_id].set_upper_bound(new_upper_bound)?;
        self.record(domain_id, events);
        Ok(())
    }

    /// Intersects the domain of `domain_id` with `[new_lower_bound, new_upper_bound]`.
    ///
    /// Returns [`EmptyDomain`] if the intersection contains no value, in which case the domain is
    /// left untouched.
    pub fn narrow_to(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if !self.domains[domain_id].intersects(new_lower_bound, new_upper_bound) {
            return Err(EmptyDomain);
        }

        self.tighten_lower_bound(domain_id, new_lower_bound)?;
        self.tighten_upper_bound(domain_id, new_upper_bound)
    }

    pub fn exclude_value(&mut self, domain_id: DomainId, value: i32) -> Result<(), EmptyDomain> {
        let events = self.domains[domain_id].remove_value(value)?;
        self.record(domain_id, events);
        Ok(())
    }

    /// Removes every value in `[from, to]` from the domain of `domain_id`.
    pub fn exclude_range(
        &mut self,
        domain_id: DomainId,
        from: i32,
        to: i32,
    ) -> Result<(), EmptyDomain> {
        let events = self.domains[domain_id].remove_range(from, to)?;
        self.record(domain_id, events);
        Ok(())
    }

    /// Fixes `domain_id` to `value`; fails if `value` is not in the domain.
    pub fn assign(&mut self, domain_id: DomainId, value: i32) -> Result<(), EmptyDomain> {
        if !self.contains(domain_id, value) {
            return Err(EmptyDomain);
        }
        self.narrow_to(domain_id, value, value)
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Restores every domain to the state captured in `snapshot`, discarding pending events.
    pub fn restore(&mut self, snapshot: &DomainSnapshot) {
        solver_assert_simple!(
            snapshot.domains.len() == self.domains.len(),
            "variables cannot be created during search"
        );
        self.domains.clone_from(&snapshot.domains);
        self.events.clear();
    }

    pub(crate) fn drain_events(
        &mut self,
    ) -> impl Iterator<Item = (DomainId, EnumSet<DomainEvent>)> + '_ {
        self.events.drain(..)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, domain_id: DomainId, events: EnumSet<DomainEvent>) {
        if !events.is_empty() {
            self.num_narrowings += 1;
            self.events.push((domain_id, events));
        }
    }
}
