use super::ValueSelector;
use crate::branching::Decision;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;

/// [`ValueSelector`] which chooses to assign the provided variable to its lower bound.
#[derive(Debug, Copy, Clone)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn select_value(&mut self, domains: &DomainStore, decision_variable: DomainId) -> Decision {
        Decision::Assign {
            variable: decision_variable,
            value: domains.lower_bound(decision_variable),
        }
    }
}
