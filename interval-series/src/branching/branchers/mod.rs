//! Provides several implementations of [`Brancher`](crate::branching::Brancher)s.
mod independent_variable_value_brancher;

pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
