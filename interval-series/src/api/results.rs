use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a solution was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that the search space was exhausted without finding a solution.
    Unsatisfiable,
    /// Indicates that it is not known whether a solution exists because a
    /// [`TerminationCondition`] triggered first.
    Unknown,
}
