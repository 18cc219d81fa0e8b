//! Hooks for watching the search while it runs.
//!
//! The search reports every step to a [`SearchObserver`]. Observers only read; the search behaves
//! identically whichever observer is plugged in, including none at all.
use log::trace;

use crate::basic_types::Solution;
use crate::branching::Decision;
use crate::engine::domains::DomainStore;

/// Receives the events of the search. All methods default to doing nothing.
pub trait SearchObserver {
    /// A decision is about to be propagated; `domains` are the domains before propagation and
    /// `depth` is the number of open search nodes including the new one.
    fn on_decision(&mut self, _decision: Decision, _domains: &DomainStore, _depth: usize) {}

    /// Propagation reached a fixpoint without failure.
    fn on_propagation(&mut self, _domains: &DomainStore) {}

    /// Propagation emptied a domain while `depth` search nodes were open.
    fn on_failure(&mut self, _depth: usize) {}

    /// A search node was closed and its `refutation` is about to be propagated at `depth`.
    fn on_backtrack(&mut self, _refutation: Decision, _depth: usize) {}

    fn on_solution(&mut self, _solution: &Solution) {}
}

impl<T: SearchObserver> SearchObserver for Option<T> {
    fn on_decision(&mut self, decision: Decision, domains: &DomainStore, depth: usize) {
        if let Some(observer) = self {
            observer.on_decision(decision, domains, depth);
        }
    }

    fn on_propagation(&mut self, domains: &DomainStore) {
        if let Some(observer) = self {
            observer.on_propagation(domains);
        }
    }

    fn on_failure(&mut self, depth: usize) {
        if let Some(observer) = self {
            observer.on_failure(depth);
        }
    }

    fn on_backtrack(&mut self, refutation: Decision, depth: usize) {
        if let Some(observer) = self {
            observer.on_backtrack(refutation, depth);
        }
    }

    fn on_solution(&mut self, solution: &Solution) {
        if let Some(observer) = self {
            observer.on_solution(solution);
        }
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_decision(&mut self, decision: Decision, domains: &DomainStore, depth: usize) {
        (**self).on_decision(decision, domains, depth);
    }

    fn on_propagation(&mut self, domains: &DomainStore) {
        (**self).on_propagation(domains);
    }

    fn on_failure(&mut self, depth: usize) {
        (**self).on_failure(depth);
    }

    fn on_backtrack(&mut self, refutation: Decision, depth: usize) {
        (**self).on_backtrack(refutation, depth);
    }

    fn on_solution(&mut self, solution: &Solution) {
        (**self).on_solution(solution);
    }
}

/// A [`SearchObserver`] which ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

/// One event of the search, as recorded by [`SearchTrace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    Decision { decision: Decision, depth: usize },
    /// Propagation succeeded; `num_fixed` variables are fixed afterwards.
    Propagation { num_fixed: usize },
    Failure { depth: usize },
    Backtrack { refutation: Decision, depth: usize },
    Solution,
}

/// A [`SearchObserver`] which records every event in memory.
#[derive(Clone, Debug, Default)]
pub struct SearchTrace {
    events: Vec<SearchEvent>,
}

impl SearchTrace {
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn num_decisions(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SearchEvent::Decision { .. }))
            .count()
    }
}

impl SearchObserver for SearchTrace {
    fn on_decision(&mut self, decision: Decision, _domains: &DomainStore, depth: usize) {
        self.events.push(SearchEvent::Decision { decision, depth });
    }

    fn on_propagation(&mut self, domains: &DomainStore) {
        let num_fixed = domains
            .get_domains()
            .filter(|&domain_id| domains.is_fixed(domain_id))
            .count();
        self.events.push(SearchEvent::Propagation { num_fixed });
    }

    fn on_failure(&mut self, depth: usize) {
        self.events.push(SearchEvent::Failure { depth });
    }

    fn on_backtrack(&mut self, refutation: Decision, depth: usize) {
        self.events.push(SearchEvent::Backtrack { refutation, depth });
    }

    fn on_solution(&mut self, _solution: &Solution) {
        self.events.push(SearchEvent::Solution);
    }
}

/// A [`SearchObserver`] which writes every event to the `trace` log level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

impl SearchObserver for LoggingObserver {
    fn on_decision(&mut self, decision: Decision, domains: &DomainStore, depth: usize) {
        trace!(
            "decide {decision} at depth {depth} (domain size {})",
            domains.domain_size(decision.variable())
        );
    }

    fn on_failure(&mut self, depth: usize) {
        trace!("failure at depth {depth}");
    }

    fn on_backtrack(&mut self, refutation: Decision, depth: usize) {
        trace!("backtrack to depth {depth}, refute with {refutation}");
    }

    fn on_solution(&mut self, solution: &Solution) {
        trace!("solution over {} variables", solution.num_domains());
    }
}
