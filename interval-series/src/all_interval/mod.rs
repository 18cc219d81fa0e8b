//! The All-Interval Series problem (CSPLib #007).
//!
//! Find a permutation `s` of `{0, .., m - 1}` such that the distances `|s[i + 1] - s[i]|` form a
//! permutation of `{1, .., m - 1}`:
//!
//! ```rust
//! # use interval_series::all_interval::solve;
//! # use interval_series::all_interval::SeriesOptions;
//! # use interval_series::all_interval::SeriesOutcome;
//! # use interval_series::engine::observer::NoObserver;
//! # use interval_series::termination::Indefinite;
//! let options = SeriesOptions {
//!     size: 4,
//!     ..Default::default()
//! };
//!
//! let (outcome, _statistics) = solve(&options, &mut Indefinite, &mut NoObserver)
//!     .expect("4 is a valid size");
//!
//! let SeriesOutcome::Solved(series) = outcome else {
//!     panic!("every size has a series");
//! };
//! assert!(series.is_valid());
//! ```
mod error;
mod model;
mod options;
mod report;

pub use error::SeriesError;
pub use model::solve;
pub use model::AllIntervalModel;
pub use model::SeriesOutcome;
pub use options::SeriesOptions;
pub use report::SeriesSolution;
