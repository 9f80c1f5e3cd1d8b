use serde::{Deserialize, Serialize};

use crate::errors::AlignmentError;

/// Dense reference × generated cosine-similarity matrix.
///
/// Rows index reference chunks, columns index generated chunks. Cells are
/// stored row-major. A `NaN` cell is *undefined* (one of its chunks had a
/// degenerate embedding) and is never eligible for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build from row-major cell values.
    ///
    /// # Errors
    /// `MatrixShape` if `values.len() != rows * cols`;
    /// `NonFiniteSimilarity` for infinite cells (NaN is allowed).
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, AlignmentError> {
        let expected = rows * cols;
        if values.len() != expected {
            return Err(AlignmentError::MatrixShape {
                expected,
                actual: values.len(),
            });
        }
        if let Some(pos) = values.iter().position(|v| v.is_infinite()) {
            return Err(AlignmentError::NonFiniteSimilarity {
                row: pos / cols.max(1),
                col: pos % cols.max(1),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Build from a list of equally sized rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AlignmentError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(AlignmentError::MatrixShape {
                expected: n_rows * n_cols,
                actual: n_rows * bad.len(),
            });
        }
        Self::new(n_rows, n_cols, rows.into_iter().flatten().collect())
    }

    /// An empty matrix with the given shape (one of the sides is zero).
    pub fn empty(rows: usize, cols: usize) -> Self {
        debug_assert!(rows == 0 || cols == 0);
        Self {
            rows,
            cols,
            values: Vec::new(),
        }
    }

    /// Number of reference chunks.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of generated chunks.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Raw cell value, `NaN` for undefined cells.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.values[row * self.cols + col]
    }

    /// Defined cell value, `None` for undefined or out-of-bounds cells.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let v = self.values[row * self.cols + col];
        (!v.is_nan()).then_some(v)
    }

    /// Values of one row (reference chunk against every generated chunk).
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Values of one column (every reference chunk against generated chunk `col`).
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.values[r * self.cols + col]).collect()
    }

    /// Swap the roles of rows and columns.
    pub fn transpose(&self) -> SimilarityMatrix {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.values[r * self.cols + c]);
            }
        }
        SimilarityMatrix {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    /// Nested rows with undefined cells as `None`, for reporting.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        (0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .map(|v| (!v.is_nan()).then_some(*v))
                    .collect()
            })
            .collect()
    }

    /// Number of undefined cells.
    pub fn undefined_cells(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}
