//! # Upper-triangular matrices
//!
//! A fixed-capacity square upper-triangular matrix container with bounds-checked element access.
//! Only the values on or above the main diagonal are stored: row `i` of a matrix of dimension `n`
//! owns exactly `n - i` values, covering columns `i` through `n - 1`.
#![warn(missing_docs)]

pub mod error;
pub mod matrix;

pub use matrix::{Row, TriangularMatrix, MAX_MATRIX_SIZE};
