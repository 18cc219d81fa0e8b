pub(crate) mod results;
mod solver;

pub use solver::Solver;
