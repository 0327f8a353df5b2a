//! # Upper-triangular matrix
//!
//! A square matrix storing only the values on or above the main diagonal. Row `i` of a matrix of
//! dimension `n` owns `n - i` values covering columns `i..n`; nothing below the diagonal is
//! representable. All element access is bounds checked on both the row and the column index.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::repeat_n;
use num_traits::Zero;

use crate::error::{IndexOutOfRangeError, InvalidSizeError, SizeMismatchError};

pub use row::Row;

mod row;

/// The largest dimension a `TriangularMatrix` can be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// A square upper-triangular matrix. Dimensions are fixed at creation.
///
/// The matrix exclusively owns its element storage; cloning duplicates every stored value and the
/// two instances never share storage afterwards. Two matrices are equal when their dimensions are
/// equal and all corresponding stored values are equal.
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularMatrix<F> {
    /// Row `i` covers columns `i..self.rows.len()`.
    rows: Vec<Row<F>>,
}

impl<F> TriangularMatrix<F> {
    /// Create a zero matrix of the given dimension.
    ///
    /// # Arguments
    ///
    /// * `size`: Dimension of the matrix; valid values lie in `1..=MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A matrix with all stored values zero, or an `InvalidSizeError` when the dimension is zero
    /// or exceeds `MAX_MATRIX_SIZE`.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError>
    where
        F: Zero + Clone,
    {
        check_size(size)?;

        Ok(Self {
            rows: (0..size).map(|i| Row::zeros(i, size - i)).collect(),
        })
    }

    /// Create a matrix from explicit row data.
    ///
    /// # Arguments
    ///
    /// * `rows`: Per-row values; row `i` must hold exactly `rows.len() - i` values, covering
    /// columns `i..rows.len()`.
    ///
    /// # Return value
    ///
    /// The matrix, or an `InvalidSizeError` when the dimension is invalid or the row data is not
    /// triangular.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, InvalidSizeError> {
        let size = rows.len();
        check_size(size)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size - i {
                return Err(InvalidSizeError::new(format!(
                    "row {} holds {} values, expected {}", i, row.len(), size - i,
                )));
            }
        }

        Ok(Self {
            rows: rows.into_iter()
                .enumerate()
                .map(|(i, data)| Row::from_values(i, data))
                .collect(),
        })
    }

    /// The dimension of this matrix.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The number of stored values; the elements on or above the main diagonal.
    pub fn nr_values(&self) -> usize {
        self.size() * (self.size() + 1) / 2
    }

    /// Borrow row `i`.
    ///
    /// # Return value
    ///
    /// The row, or an `IndexOutOfRangeError` when `i >= self.size()`.
    pub fn row(&self, i: usize) -> Result<&Row<F>, IndexOutOfRangeError> {
        if i < self.size() {
            Ok(&self.rows[i])
        } else {
            Err(IndexOutOfRangeError::new(i, 0..self.size()))
        }
    }

    /// Borrow row `i` mutably.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut Row<F>, IndexOutOfRangeError> {
        let size = self.size();
        if i < size {
            Ok(&mut self.rows[i])
        } else {
            Err(IndexOutOfRangeError::new(i, 0..size))
        }
    }

    /// Retrieve the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> Result<&F, IndexOutOfRangeError> {
        self.row(i)?.get(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), IndexOutOfRangeError> {
        self.row_mut(i)?.set(j, value)
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> Iter<'_, Row<F>> {
        self.rows.iter()
    }

    /// Element-wise sum of two matrices of equal dimension.
    ///
    /// Neither operand is changed; a new matrix is created.
    ///
    /// # Return value
    ///
    /// The sum, or a `SizeMismatchError` when the dimensions differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, SizeMismatchError>
    where
        for<'r> &'r F: Add<&'r F, Output = F>,
    {
        self.zip_with(rhs, |left, right| left + right)
    }

    /// Element-wise difference of two matrices of equal dimension.
    ///
    /// Neither operand is changed; a new matrix is created.
    ///
    /// # Return value
    ///
    /// The difference, or a `SizeMismatchError` when the dimensions differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, SizeMismatchError>
    where
        for<'r> &'r F: Sub<&'r F, Output = F>,
    {
        self.zip_with(rhs, |left, right| left - right)
    }

    /// Combine two matrices of equal dimension value by value.
    fn zip_with(
        &self,
        rhs: &Self,
        operation: impl Fn(&F, &F) -> F,
    ) -> Result<Self, SizeMismatchError> {
        if self.size() != rhs.size() {
            return Err(SizeMismatchError::new(self.size(), rhs.size()));
        }

        let rows = self.rows.iter()
            .zip(rhs.rows.iter())
            .enumerate()
            .map(|(i, (left, right))| {
                debug_assert_eq!(left.len(), right.len());

                let data = left.iter_values()
                    .zip(right.iter_values())
                    .map(|(left_value, right_value)| operation(left_value, right_value))
                    .collect();
                Row::from_values(i, data)
            })
            .collect();

        Ok(Self { rows, })
    }
}

impl<F: Clone> Clone for TriangularMatrix<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Assign `source` into this matrix, resizing the storage when the dimensions differ.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<F> Index<usize> for TriangularMatrix<F> {
    type Output = Row<F>;

    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<usize> for TriangularMatrix<F> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, F> Add for &'a TriangularMatrix<F>
where
    for<'r> &'r F: Add<&'r F, Output = F>,
{
    type Output = TriangularMatrix<F>;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, F> Sub for &'a TriangularMatrix<F>
where
    for<'r> &'r F: Sub<&'r F, Output = F>,
{
    type Output = TriangularMatrix<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: Display> Display for TriangularMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = 1 + self.rows.iter()
            .flat_map(|row| row.iter_values())
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        for row in &self.rows {
            write!(f, "{}", repeat_n(" ", row.start() * width).collect::<String>())?;
            for value in row.iter_values() {
                write!(f, "{:>width$}", value.to_string(), width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Check that a matrix of dimension `size` may be constructed.
fn check_size(size: usize) -> Result<(), InvalidSizeError> {
    if size == 0 || size > MAX_MATRIX_SIZE {
        Err(InvalidSizeError::new(format!(
            "dimension {} outside 1..={}", size, MAX_MATRIX_SIZE,
        )))
    } else {
        Ok(())
    }
}
