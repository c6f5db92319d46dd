//! Square connectivity matrix type shared by the parser and the store.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A square ROI-by-ROI connectivity matrix.
///
/// Values are stored flattened in row-major order, `dim × dim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    dim: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a flat row-major value buffer.
    pub fn from_flat(dim: usize, values: Vec<f64>) -> Result<Self> {
        if dim == 0 {
            return Err(GridError::InvalidParameter(
                "matrix dimension must be at least 1".to_string(),
            ));
        }
        if values.len() != dim * dim {
            return Err(GridError::InvalidParameter(format!(
                "expected {} values for a {}x{} matrix, found {}",
                dim * dim,
                dim,
                dim,
                values.len()
            )));
        }
        Ok(Self { dim, values })
    }

    /// Build a matrix from row vectors. Rows must be square: `n` rows of `n` values.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(GridError::InvalidParameter(
                "matrix must have at least one row".to_string(),
            ));
        }
        let mut values = Vec::with_capacity(dim * dim);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(GridError::InvalidParameter(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(Self { dim, values })
    }

    /// Side length of the matrix (number of ROIs).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Value at `(row, col)`. Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim + col]
    }

    /// Flat row-major view of all values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.dim)
    }

    /// Set every diagonal element to zero, in place.
    pub fn zero_diagonal(&mut self) {
        for i in 0..self.dim {
            self.values[i * self.dim + i] = 0.0;
        }
    }

    /// Binarize into a new matrix: strictly positive values become 1.0,
    /// everything else (zero, negative, NaN) becomes 0.0.
    pub fn binarized(&self) -> Matrix {
        let values = self
            .values
            .iter()
            .map(|&v| if v > 0.0 { 1.0 } else { 0.0 })
            .collect();
        Matrix {
            dim: self.dim,
            values,
        }
    }
}
