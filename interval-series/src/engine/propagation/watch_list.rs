use enumset::EnumSet;

use super::PropagatorId;
use crate::containers::KeyedVec;
use crate::engine::domains::DomainEvent;
use crate::engine::domains::DomainEvents;
use crate::engine::domains::DomainId;

/// For every variable, the propagators which want to be woken up on a subset of its
/// [`DomainEvent`]s.
#[derive(Debug, Clone, Default)]
pub(crate) struct WatchList {
    watchers: KeyedVec<DomainId, Vec<(PropagatorId, EnumSet<DomainEvent>)>>,
}

impl WatchList {
    pub(crate) fn watch(
        &mut self,
        domain_id: DomainId,
        events: DomainEvents,
        propagator: PropagatorId,
    ) {
        self.watchers.accomodate(domain_id, Vec::new());

        let watchers = &mut self.watchers[domain_id];
        if let Some((_, subscribed)) = watchers.iter_mut().find(|(id, _)| *id == propagator) {
            *subscribed |= events.get_events();
        } else {
            watchers.push((propagator, events.get_events()));
        }
    }

    /// The propagators watching `domain_id` for at least one of the given `events`.
    pub(crate) fn get_affected_propagators(
        &self,
        domain_id: DomainId,
        events: EnumSet<DomainEvent>,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.watchers
            .get(domain_id)
            .into_iter()
            .flatten()
            .filter(move |(_, subscribed)| !subscribed.is_disjoint(events))
            .map(|(propagator, _)| *propagator)
    }
}
