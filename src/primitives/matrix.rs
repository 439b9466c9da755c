//! Matrix type for observation sets.

use super::Kinematics;
use crate::error::{IntentError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of values in row-major storage, one observation per row.
///
/// # Examples
///
/// ```
/// use lane_intent::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols, or if
    /// rows * cols overflows `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| IntentError::DimensionMismatch {
                expected: format!("rows * cols within usize ({rows} x {cols})"),
                actual: data.len().to_string(),
            })?;
        if data.len() != expected {
            return Err(IntentError::dimension_mismatch(
                "rows * cols",
                expected,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a sequence of observations.
    ///
    /// The first row fixes the column count; every other row must match it.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty or ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| IntentError::empty_input("observation rows"))?;
        let cols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(IntentError::DimensionMismatch {
                    expected: format!("row {i} length={cols}"),
                    actual: format!("{}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Stacks kinematic observations into an `n x 4` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `observations` is empty.
    pub fn from_kinematics(observations: &[Kinematics]) -> Result<Self> {
        let rows: Vec<[f64; Kinematics::N_FEATURES]> =
            observations.iter().map(Kinematics::to_features).collect();
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
