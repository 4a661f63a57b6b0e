//! Input data for the formatters.
//!
//! The solver owns the numbers; this module only describes how they are
//! read. [`MatrixView`] and [`VectorView`] are implemented for plain nested
//! `Vec`s, slices, arrays and [`DenseMatrix`], so solver output can be passed
//! in directly. [`MnaSource`] bundles the three parts of Ax = z the way a
//! circuit object would.

mod snapshot;
mod types;

pub use snapshot::{MnaSnapshot, MnaSource};
pub use types::{DenseMatrix, MatrixView, VectorView};
