//! Read-only views over solver matrices and vectors.

use crate::error::{MnaPrintError, Result};

/// Row-major read access to a real-valued matrix.
pub trait MatrixView {
    /// Number of rows.
    fn rows(&self) -> usize;
    /// Number of columns, taken from the first row.
    fn cols(&self) -> usize;
    /// Entry at (row, col).
    fn value(&self, row: usize, col: usize) -> f64;

    /// Number of entries in `row`.
    ///
    /// Differs from [`cols`](MatrixView::cols) only for ragged nested rows.
    fn row_len(&self, _row: usize) -> usize {
        self.cols()
    }
}

/// Indexed read access to a real-valued vector.
pub trait VectorView {
    /// Number of elements.
    fn len(&self) -> usize;
    /// Element at `index`.
    fn value(&self, index: usize) -> f64;

    /// Check if the vector has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: AsRef<[f64]>> MatrixView for [R] {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, |row| row.as_ref().len())
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[row].as_ref()[col]
    }

    fn row_len(&self, row: usize) -> usize {
        self[row].as_ref().len()
    }
}

impl<R: AsRef<[f64]>> MatrixView for Vec<R> {
    fn rows(&self) -> usize {
        self.as_slice().rows()
    }

    fn cols(&self) -> usize {
        self.as_slice().cols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self.as_slice().value(row, col)
    }

    fn row_len(&self, row: usize) -> usize {
        self.as_slice().row_len(row)
    }
}

impl<R: AsRef<[f64]>, const N: usize> MatrixView for [R; N] {
    fn rows(&self) -> usize {
        N
    }

    fn cols(&self) -> usize {
        self.as_slice().cols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self.as_slice().value(row, col)
    }

    fn row_len(&self, row: usize) -> usize {
        self.as_slice().row_len(row)
    }
}

impl VectorView for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }
}

impl VectorView for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize> VectorView for [f64; N] {
    fn len(&self) -> usize {
        N
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }
}

/// Dense real matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    /// Entries (row-major)
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Create a zero-filled matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MnaPrintError::ragged(i, cols, row.len()));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }
}

impl MatrixView for DenseMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self.get(row, col)
    }
}
