use crate::engine::domains::EmptyDomain;

/// The result of running the body of a propagator. The propagation either succeeds or empties a
/// domain, in which case the current branch of the search is inconsistent.
pub(crate) type PropagationStatusCP = Result<(), EmptyDomain>;

/// The result of invoking a propagator through the propagation engine.
pub(crate) type PropagationStatus = Result<PropagationOutcome, EmptyDomain>;

/// What a successful propagator invocation did to the domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropagationOutcome {
    /// No domain was narrowed.
    NoChange,
    /// At least one domain was narrowed.
    Narrowed,
}
