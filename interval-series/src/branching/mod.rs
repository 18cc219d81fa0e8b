//! Contains structures and traits to define the decision making procedure of the search.
//!
//! A [`Brancher`] inspects the current domains and proposes the next [`Decision`]. The
//! [`IndependentVariableValueBrancher`] splits this into choosing a variable with a
//! [`VariableSelector`] and choosing a value for it with a [`ValueSelector`]:
//!
//! ```rust
//! # use interval_series::Solver;
//! # use interval_series::branching::IndependentVariableValueBrancher;
//! # use interval_series::branching::Brancher;
//! # use interval_series::branching::Decision;
//! # use interval_series::branching::value_selection::InDomainMin;
//! # use interval_series::branching::variable_selection::FirstFail;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(0, 5).expect("non-empty domain");
//! let y = solver.new_bounded_integer(2, 3).expect("non-empty domain");
//!
//! let mut brancher = IndependentVariableValueBrancher::new(FirstFail::new(&[x, y]), InDomainMin);
//!
//! assert_eq!(
//!     Some(Decision::Assign { variable: y, value: 2 }),
//!     brancher.next_decision(solver.domains())
//! );
//! ```
mod brancher;
pub mod branchers;
mod decision;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use branchers::IndependentVariableValueBrancher;
pub use decision::Decision;
