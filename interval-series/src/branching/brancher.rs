use super::Decision;
use crate::engine::domains::DomainStore;

/// A branching strategy: decides which part of the search space is explored next.
///
/// The returned [`Decision`] has to exclude at least one value of an unfixed variable; both the
/// decision and its negation are explored by the search.
pub trait Brancher {
    /// Returns the next decision, or [`None`] if all variables under consideration are fixed.
    ///
    /// The brancher only proposes the decision, the search applies it.
    fn next_decision(&mut self, domains: &DomainStore) -> Option<Decision>;
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, domains: &DomainStore) -> Option<Decision> {
        (**self).next_decision(domains)
    }
}
