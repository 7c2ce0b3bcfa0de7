mod check_status;
mod constraint_operation_error;

pub use check_status::CheckStatus;
pub use constraint_operation_error::ConstraintOperationError;
