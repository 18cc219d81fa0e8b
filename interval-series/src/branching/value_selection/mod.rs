//! Value selectors turn a selected variable into a [`Decision`].
mod in_domain_min;

pub use in_domain_min::InDomainMin;

use crate::branching::Decision;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;

pub trait ValueSelector {
    /// Determines the decision for the unfixed `decision_variable`.
    fn select_value(&mut self, domains: &DomainStore, decision_variable: DomainId) -> Decision;
}
