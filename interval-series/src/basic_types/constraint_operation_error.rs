use thiserror::Error;

#[cfg(doc)]
use crate::Solver;
use crate::engine::domains::DomainId;

/// Errors related to adding variables and constraints to the [`Solver`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// A variable was requested with a lower bound exceeding its upper bound.
    #[error("Cannot create a variable with the empty domain [{lower_bound}, {upper_bound}]")]
    EmptyInitialDomain { lower_bound: i32, upper_bound: i32 },
    /// A propagator mentions a variable which does not exist in the [`Solver`].
    #[error("Adding the constraint failed because variable {0} does not exist")]
    UnknownVariable(DomainId),
    /// A propagator was added after the search started.
    #[error("Adding constraint failed because the solver has already been used for search")]
    SearchStarted,
}
