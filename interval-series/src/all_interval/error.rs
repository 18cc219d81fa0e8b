use thiserror::Error;

use crate::basic_types::ConstraintOperationError;

/// Errors which prevent an All-Interval Series instance from being solved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// The requested series size is smaller than 1.
    #[error("The size of an all-interval series has to be at least 1, but was {0}")]
    InvalidInput(i32),
    /// The solver rejected part of the model.
    #[error("Failed to build the model: {0}")]
    Model(#[from] ConstraintOperationError),
}
