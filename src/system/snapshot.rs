//! Bundles of the three MNA quantities.

use super::types::{DenseMatrix, MatrixView, VectorView};

/// A circuit-like object exposing the MNA system Ax = z.
///
/// Any of the three parts may be unavailable: the matrix and knowns before
/// the system is assembled, the unknowns before it is solved.
pub trait MnaSource {
    /// Matrix type for A.
    type Matrix: MatrixView + ?Sized;
    /// Vector type for z and x.
    type Vector: VectorView + ?Sized;

    /// Coefficient matrix A.
    fn matrix(&self) -> Option<&Self::Matrix>;
    /// Known-values vector z.
    fn knowns(&self) -> Option<&Self::Vector>;
    /// Solved unknowns x.
    fn unknowns(&self) -> Option<&Self::Vector>;
}

/// Owned copy of an MNA system at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MnaSnapshot {
    /// System matrix A
    pub matrix: Option<DenseMatrix>,
    /// Source vector z
    pub knowns: Option<Vec<f64>>,
    /// Solution vector x
    pub unknowns: Option<Vec<f64>>,
}

impl MnaSnapshot {
    /// Create an empty snapshot with nothing available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coefficient matrix.
    pub fn with_matrix(mut self, matrix: DenseMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Set the knowns vector.
    pub fn with_knowns(mut self, knowns: Vec<f64>) -> Self {
        self.knowns = Some(knowns);
        self
    }

    /// Set the unknowns vector.
    pub fn with_unknowns(mut self, unknowns: Vec<f64>) -> Self {
        self.unknowns = Some(unknowns);
        self
    }
}

impl MnaSource for MnaSnapshot {
    type Matrix = DenseMatrix;
    type Vector = Vec<f64>;

    fn matrix(&self) -> Option<&DenseMatrix> {
        self.matrix.as_ref()
    }

    fn knowns(&self) -> Option<&Vec<f64>> {
        self.knowns.as_ref()
    }

    fn unknowns(&self) -> Option<&Vec<f64>> {
        self.unknowns.as_ref()
    }
}
