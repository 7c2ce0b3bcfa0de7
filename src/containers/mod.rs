//! Containers used by the checker.

mod bit_vec;

pub use bit_vec::BitVec;
