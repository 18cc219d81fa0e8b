use itertools::Itertools;

use super::Priority;
use super::PropagatorId;
use super::PropagatorQueue;
use super::WatchList;
use crate::basic_types::PropagationOutcome;
use crate::containers::KeyedVec;
use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;
use crate::engine::EngineStatistics;
use crate::propagators::Propagator;
use crate::solver_assert_moderate;

/// Runs propagators until none of them can narrow a domain any further.
///
/// After a propagator ran, the domain events it caused are drained from the [`DomainStore`] and
/// every propagator watching an affected variable for such an event is enqueued. Propagators are
/// idempotent, so the propagator which caused the events is only enqueued again when it mentions
/// a variable more than once.
#[derive(Debug, Default)]
pub(crate) struct PropagationEngine {
    queue: PropagatorQueue,
    watch_list: WatchList,
    priorities: KeyedVec<PropagatorId, Priority>,
    has_repeated_variables: KeyedVec<PropagatorId, bool>,
}

impl PropagationEngine {
    /// Subscribes `propagator` to the variables in its scope and schedules it for its first run.
    pub(crate) fn register(&mut self, propagator_id: PropagatorId, propagator: &Propagator) {
        let scope = propagator.scope();
        for &domain_id in scope.iter() {
            self.watch_list
                .watch(domain_id, propagator.subscriptions(), propagator_id);
        }

        self.priorities.accomodate(propagator_id, Priority::Low);
        self.priorities[propagator_id] = propagator.priority();
        self.has_repeated_variables.accomodate(propagator_id, false);
        self.has_repeated_variables[propagator_id] = !scope.iter().all_unique();

        self.queue.enqueue_propagator(propagator_id, propagator.priority());
    }

    /// Schedules every registered propagator.
    pub(crate) fn enqueue_all(&mut self) {
        for propagator_id in self.priorities.keys() {
            self.queue
                .enqueue_propagator(propagator_id, self.priorities[propagator_id]);
        }
    }

    /// Propagates until the queue is empty.
    ///
    /// Pending domain events (for example those of a decision) wake up their watchers first. On
    /// failure the queue and the pending events are discarded; the caller restores the domains.
    pub(crate) fn propagate_to_fixpoint(
        &mut self,
        propagators: &KeyedVec<PropagatorId, Propagator>,
        domains: &mut DomainStore,
        statistics: &mut EngineStatistics,
    ) -> Result<(), EmptyDomain> {
        self.notify_changes(domains, None);

        while let Some(propagator_id) = self.queue.pop() {
            statistics.num_propagations += 1;

            match propagators[propagator_id].propagate(domains) {
                Ok(PropagationOutcome::Narrowed) => {
                    self.notify_changes(domains, Some(propagator_id));
                }
                Ok(PropagationOutcome::NoChange) => {}
                Err(EmptyDomain) => {
                    self.queue.clear();
                    domains.clear_events();
                    return Err(EmptyDomain);
                }
            }
        }

        solver_assert_moderate!(
            propagators
                .keys()
                .all(|propagator_id| propagators[propagator_id]
                    .propagate(&mut domains.clone())
                    == Ok(PropagationOutcome::NoChange)),
            "a propagator can still narrow a domain at the fixpoint"
        );

        Ok(())
    }

    fn notify_changes(&mut self, domains: &mut DomainStore, last_run: Option<PropagatorId>) {
        for (domain_id, events) in domains.drain_events() {
            for propagator_id in self.watch_list.get_affected_propagators(domain_id, events) {
                if Some(propagator_id) == last_run && !self.has_repeated_variables[propagator_id] {
                    continue;
                }

                self.queue
                    .enqueue_propagator(propagator_id, self.priorities[propagator_id]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_all(
        engine: &mut PropagationEngine,
        propagators: &KeyedVec<PropagatorId, Propagator>,
    ) {
        for propagator_id in propagators.keys() {
            engine.register(propagator_id, &propagators[propagator_id]);
        }
    }

    #[test]
    fn chain_of_strict_orderings_reaches_the_fixpoint() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 10);
        let y = domains.grow(0, 10);
        let z = domains.grow(0, 10);

        let mut propagators = KeyedVec::default();
        let _ = propagators.push(Propagator::strict_greater(z, y));
        let _ = propagators.push(Propagator::strict_greater(y, x));
        let _ = propagators.push(Propagator::member(z, 0, 3));

        let mut engine = PropagationEngine::default();
        register_all(&mut engine, &propagators);
        let mut statistics = EngineStatistics::default();

        engine
            .propagate_to_fixpoint(&propagators, &mut domains, &mut statistics)
            .expect("the chain is consistent");

        assert_eq!((0, 1), (domains.lower_bound(x), domains.upper_bound(x)));
        assert_eq!((1, 2), (domains.lower_bound(y), domains.upper_bound(y)));
        assert_eq!((2, 3), (domains.lower_bound(z), domains.upper_bound(z)));
        assert!(statistics.num_propagations >= 3);
    }

    #[test]
    fn decision_events_wake_up_watchers() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 5);
        let y = domains.grow(0, 5);

        let mut propagators = KeyedVec::default();
        let _ = propagators.push(Propagator::all_different(vec![x, y]));

        let mut engine = PropagationEngine::default();
        register_all(&mut engine, &propagators);
        let mut statistics = EngineStatistics::default();
        engine
            .propagate_to_fixpoint(&propagators, &mut domains, &mut statistics)
            .expect("consistent");

        domains.assign(x, 0).expect("0 is in the domain");
        engine
            .propagate_to_fixpoint(&propagators, &mut domains, &mut statistics)
            .expect("consistent");

        assert_eq!(1, domains.lower_bound(y));
    }

    #[test]
    fn failure_empties_the_queue() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 1);
        let y = domains.grow(0, 1);

        let mut propagators = KeyedVec::default();
        let _ = propagators.push(Propagator::strict_greater(x, y));
        let _ = propagators.push(Propagator::strict_greater(y, x));

        let mut engine = PropagationEngine::default();
        register_all(&mut engine, &propagators);
        let mut statistics = EngineStatistics::default();

        let result = engine.propagate_to_fixpoint(&propagators, &mut domains, &mut statistics);

        assert_eq!(Err(EmptyDomain), result);
        assert!(engine.queue.is_empty());
        assert_eq!(0, domains.drain_events().count());
    }

    #[test]
    fn repeated_variables_are_detected() {
        let x = crate::engine::domains::DomainId::new(0);
        let y = crate::engine::domains::DomainId::new(1);
        let mut engine = PropagationEngine::default();

        engine.register(PropagatorId(0), &Propagator::all_different(vec![x, y, x]));
        engine.register(PropagatorId(1), &Propagator::all_different(vec![x, y]));

        assert!(engine.has_repeated_variables[PropagatorId(0)]);
        assert!(!engine.has_repeated_variables[PropagatorId(1)]);
    }
}
