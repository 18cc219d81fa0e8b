mod constraint_operation_error;
mod propagation_status;
mod solution;

pub use constraint_operation_error::ConstraintOperationError;
pub use propagation_status::PropagationOutcome;
pub(crate) use propagation_status::PropagationStatus;
pub(crate) use propagation_status::PropagationStatusCP;
pub use solution::Solution;
