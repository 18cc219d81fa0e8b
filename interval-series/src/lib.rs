//! # Interval Series
//! A small constraint solver for the All-Interval Series problem (CSPLib #007): find a
//! permutation of `{0, .., m - 1}` whose consecutive absolute differences are a permutation of
//! `{1, .., m - 1}`.
//!
//! The solver consists of
//! - a [`DomainStore`](engine::domains::DomainStore) of integer domains with snapshot based
//!   backtracking,
//! - a closed set of [`Propagator`](propagators::Propagator)s which narrow those domains,
//! - a propagation engine which runs the propagators to a fixpoint,
//! - and a depth-first search driven by a [`Brancher`](branching::Brancher), stopped by a
//!   [`TerminationCondition`](termination::TerminationCondition) and watched by a
//!   [`SearchObserver`](engine::observer::SearchObserver).
//!
//! The [`all_interval`] module builds the model of an instance on top of the [`Solver`] and
//! formats the series it finds:
//!
//! ```rust
//! # use interval_series::all_interval::solve;
//! # use interval_series::all_interval::SeriesOptions;
//! # use interval_series::all_interval::SeriesOutcome;
//! # use interval_series::engine::observer::NoObserver;
//! # use interval_series::termination::Indefinite;
//! let options = SeriesOptions {
//!     size: 4,
//!     use_auxiliary_views: false,
//! };
//! let (outcome, _) = solve(&options, &mut Indefinite, &mut NoObserver).expect("valid size");
//!
//! if let SeriesOutcome::Solved(series) = outcome {
//!     println!("{series}");
//! }
//! ```
pub(crate) mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub mod engine;
pub mod propagators;

pub mod all_interval;
pub mod branching;
pub mod statistics;

pub use convert_case;

mod api;

pub use api::Solver;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::PropagationOutcome;
pub use crate::basic_types::Solution;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`](crate::Solver).
    pub use crate::api::results::SatisfactionResult;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the solver should terminate even
    //! when the search has not finished.
    pub use crate::engine::termination::*;
}
