//! Core observation primitives (Matrix, Kinematics).
//!
//! Training sets and query batches are row-major matrices with one
//! observation per row.

mod kinematics;
mod matrix;

pub use kinematics::Kinematics;
pub use matrix::Matrix;
