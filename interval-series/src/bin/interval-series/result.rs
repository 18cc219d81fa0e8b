use interval_series::all_interval::SeriesError;
use thiserror::Error;

pub(crate) type SeriesCliResult<T> = Result<T, SeriesCliError>;

#[derive(Error, Debug)]
pub(crate) enum SeriesCliError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to solve the instance, more details: {0}")]
    Series(#[from] SeriesError),
}
