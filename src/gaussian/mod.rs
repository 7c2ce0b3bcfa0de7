//! The XOR consistency checker: constraint storage, projection of the
//! constraints onto the current assignment, and Gaussian elimination over
//! GF(2).

mod elimination;
mod incremental;
mod matrix;
mod statistics;
mod xor_checker;
mod xor_constraint;

pub use incremental::IncrementalGaussian;
pub use statistics::GaussStatistics;
pub use xor_checker::XorChecker;
pub use xor_constraint::XorConstraint;
