//! The constraint solving engine: domains, propagation, termination and the search itself.
pub(crate) mod constraint_satisfaction_solver;
pub mod domains;
pub mod observer;
pub mod propagation;
mod solver_statistics;
pub mod termination;
pub(crate) mod test_solver;

pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub use propagation::PropagatorId;
pub use solver_statistics::EngineStatistics;
