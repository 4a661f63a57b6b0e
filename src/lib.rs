//! # MNA Print
//!
//! Human-readable text views of Modified Nodal Analysis (MNA) systems.
//!
//! An MNA solver reduces a circuit to the linear system Ax = z. When the
//! simulation misbehaves, the quickest check is to look at the numbers. This
//! library renders them as bracketed blocks and lines the blocks up as an
//! equation:
//!
//! ```text
//! ┌ 1.0     , 0.0     , ┐ ┌ 1.0     ┐ = ┌ 3.0     ┐
//! └ 0.0     , 1.0     , ┘ └ 2.0     ┘   └ 4.0     ┘
//! ```
//!
//! ## Architecture
//!
//! - [`system`] - Read-only views over matrices, vectors and whole systems
//! - [`format`] - Block and composite formatters, color decoration
//! - [`print`] - Console and writer output
//! - [`dsl`] - Text format for saving a system to disk
//!
//! ## Usage
//!
//! ```
//! use mna_print::format::mna_format;
//!
//! let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
//! let z = vec![3.0, 4.0];
//! let x = vec![3.0, 4.0];
//!
//! let unsolved = mna_format(&a, &z, None, false);
//! assert!(unsolved.contains(" x = "));
//!
//! let solved = mna_format(&a, &z, Some(&x), false);
//! assert_eq!(solved.lines().count(), 2);
//! ```
//!
//! ### CLI
//!
//! ```bash
//! mnaprint divider.mna --no-color
//! ```

pub mod dsl;
pub mod error;
pub mod format;
pub mod print;
pub mod system;

// Re-export main types for convenience
pub use error::{MnaPrintError, Result};
pub use format::{
    knowns_format, matrix_format, mna_format, mna_format_no_unknowns, mna_format_source,
    unknowns_format, Decorator, FORMAT_SIZE,
};
pub use system::{DenseMatrix, MatrixView, MnaSnapshot, MnaSource, VectorView};
