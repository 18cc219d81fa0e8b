//! Variable selectors choose which unfixed variable the next decision is about.
mod first_fail;

pub use first_fail::FirstFail;

use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;

pub trait VariableSelector {
    /// Determines which variable to select next, or [`None`] if all variables under
    /// consideration are fixed.
    fn select_variable(&mut self, domains: &DomainStore) -> Option<DomainId>;
}
