use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Tolerance below which two entries count as equal.
pub const COMPARISON_EPSILON: f64 = 1e-4;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error(
        "cannot {operation} a {left_rows}x{left_columns} matrix \
         with a {right_rows}x{right_columns} matrix"
    )]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
    #[error("entry ({row}, {column}) is outside a {row_count}x{column_count} matrix")]
    OutOfRange {
        row: usize,
        column: usize,
        row_count: usize,
        column_count: usize,
    },
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

pub fn almost_equal(left: f64, right: f64) -> bool {
    (left - right).abs() < COMPARISON_EPSILON
}

/// A row-major grid of f64 entries, zero-initialized at construction.
///
/// Equality is approximate with [`COMPARISON_EPSILON`]; two matrices of
/// different dimensions are never equal.
#[derive(Clone, Debug)]
pub struct Matrix {
    row_count: usize,
    column_count: usize,
    entries: Vec<f64>,
}

impl Matrix {
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            entries: vec![0.0; row_count * column_count],
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    fn entry_index(&self, row: usize, column: usize) -> usize {
        row * self.column_count + column
    }

    fn contains(&self, row: usize, column: usize) -> bool {
        row < self.row_count && column < self.column_count
    }

    pub fn entry(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        if !self.contains(row, column) {
            return Err(self.out_of_range(row, column));
        }
        Ok(self.entries[self.entry_index(row, column)])
    }

    pub fn set_entry(&mut self, row: usize, column: usize, value: f64) -> Result<(), MatrixError> {
        if !self.contains(row, column) {
            return Err(self.out_of_range(row, column));
        }
        let entry_index = self.entry_index(row, column);
        self.entries[entry_index] = value;
        Ok(())
    }

    fn out_of_range(&self, row: usize, column: usize) -> MatrixError {
        MatrixError::OutOfRange {
            row,
            column,
            row_count: self.row_count,
            column_count: self.column_count,
        }
    }

    /// Element-wise sum; both operands must have identical dimensions.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.row_count != other.row_count || self.column_count != other.column_count {
            return Err(MatrixError::DimensionMismatch {
                operation: "add",
                left_rows: self.row_count,
                left_columns: self.column_count,
                right_rows: other.row_count,
                right_columns: other.column_count,
            });
        }

        let mut sum = Matrix::new(self.row_count, self.column_count);
        for (entry_index, sum_entry) in sum.entries.iter_mut().enumerate() {
            *sum_entry = self.entries[entry_index] + other.entries[entry_index];
        }
        Ok(sum)
    }

    /// Standard matrix product; the left column count must match the right
    /// row count.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.column_count != other.row_count {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiply",
                left_rows: self.row_count,
                left_columns: self.column_count,
                right_rows: other.row_count,
                right_columns: other.column_count,
            });
        }

        let mut product = Matrix::new(self.row_count, other.column_count);
        for row in 0..self.row_count {
            for column in 0..other.column_count {
                let mut inner_sum = 0.0;
                for inner in 0..self.column_count {
                    inner_sum += self[(row, inner)] * other[(inner, column)];
                }
                product[(row, column)] = inner_sum;
            }
        }
        Ok(product)
    }

    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        if self.row_count != other.row_count || self.column_count != other.column_count {
            return false;
        }
        self.entries
            .iter()
            .zip(other.entries.iter())
            .all(|(left, right)| (left - right).abs() < epsilon)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, COMPARISON_EPSILON)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            self.contains(row, column),
            "entry ({row}, {column}) is outside a {}x{} matrix",
            self.row_count,
            self.column_count
        );
        &self.entries[row * self.column_count + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(
            self.contains(row, column),
            "entry ({row}, {column}) is outside a {}x{} matrix",
            self.row_count,
            self.column_count
        );
        let entry_index = row * self.column_count + column;
        &mut self.entries[entry_index]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.row_count {
            for column in 0..self.column_count {
                write!(formatter, "{:>10.4}", self[(row, column)])?;
            }
            writeln!(formatter)?;
        }
        Ok(())
    }
}
