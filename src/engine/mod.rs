//! The boundary with the surrounding search procedure: variables, truth
//! values, and the assignment oracle the checker queries.

mod assignment;
mod truth_value;
mod xor_variable;

pub use assignment::AssignmentOracle;
pub use assignment::VecAssignment;
pub use truth_value::TruthValue;
pub use xor_variable::XorVariable;
