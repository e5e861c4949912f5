use crate::error::SquareMatError;
use itertools::Itertools;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Dense square matrix of `f64` values.
///
/// Cells are stored row-major in a single `Vec`, cell `(i, j)` at
/// `cells[i * order + j]`. The order is fixed at construction; in-place
/// operations mutate contents, never the order. Cloning deep-copies the
/// backing store.
#[derive(Debug, Clone)]
pub struct SquareMat {
    order: usize,
    cells: Vec<f64>,
}

impl SquareMat {
    /// Creates a zero-filled matrix of the given order.
    pub fn new(order: usize) -> Result<SquareMat, SquareMatError> {
        if order == 0 {
            return Err(SquareMatError::InvalidArgument(
                "order must be positive".into(),
            ));
        }
        Ok(SquareMat {
            order,
            cells: vec![f64::zero(); order * order],
        })
    }

    /// Creates the identity matrix of the given order.
    pub fn identity(order: usize) -> Result<SquareMat, SquareMatError> {
        let mut result = SquareMat::new(order)?;
        for i in 0..order {
            result.cells[i * order + i] = f64::one();
        }
        Ok(result)
    }

    /// Builds a matrix from row vectors. The input must be non-empty,
    /// rectangular, and square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<SquareMat, SquareMatError> {
        if rows.is_empty() {
            return Err(SquareMatError::InvalidArgument(
                "rows must not be empty".into(),
            ));
        }
        if !rows.iter().map(|row| row.len()).all_equal() {
            return Err(SquareMatError::InvalidArgument(
                "rows must all have the same length".into(),
            ));
        }
        if rows[0].len() != rows.len() {
            return Err(SquareMatError::InvalidArgument(format!(
                "expected {} columns per row, got {}",
                rows.len(),
                rows[0].len()
            )));
        }

        Ok(SquareMat {
            order: rows.len(),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the cells as row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.order)
            .map(|row| row.into())
            .collect()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.order + col]
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), SquareMatError> {
        if row >= self.order || col >= self.order {
            return Err(SquareMatError::IndexOutOfRange(format!(
                "cell ({}, {}) outside order {}",
                row, col, self.order
            )));
        }
        Ok(())
    }

    fn check_order(&self, rhs: &SquareMat) -> Result<(), SquareMatError> {
        if self.order != rhs.order {
            return Err(SquareMatError::InvalidArgument(format!(
                "matrix orders must match: {} != {}",
                self.order, rhs.order
            )));
        }
        Ok(())
    }

    /// Reads the cell at `(row, col)`, validating both indices.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, SquareMatError> {
        self.check_cell(row, col)?;
        Ok(self.at(row, col))
    }

    /// Mutable access to the cell at `(row, col)`, validating both indices.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, SquareMatError> {
        self.check_cell(row, col)?;
        let order = self.order;
        Ok(&mut self.cells[row * order + col])
    }

    /// Writes the cell at `(row, col)`, validating both indices.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), SquareMatError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Read-only view of one row.
    pub fn row(&self, row: usize) -> Result<&[f64], SquareMatError> {
        if row >= self.order {
            return Err(SquareMatError::IndexOutOfRange(format!(
                "row {} outside order {}",
                row, self.order
            )));
        }
        Ok(&self.cells[row * self.order..(row + 1) * self.order])
    }

    /// Mutable view of one row.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [f64], SquareMatError> {
        if row >= self.order {
            return Err(SquareMatError::IndexOutOfRange(format!(
                "row {} outside order {}",
                row, self.order
            )));
        }
        let order = self.order;
        Ok(&mut self.cells[row * order..(row + 1) * order])
    }

    /// Element-wise sum. Fails when the orders differ.
    pub fn add(&self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        Ok(SquareMat {
            order: self.order,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Element-wise difference. Fails when the orders differ.
    pub fn sub(&self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        Ok(SquareMat {
            order: self.order,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    /// Matrix product, plain triple loop. Fails when the orders differ.
    pub fn mul(&self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        let n = self.order;
        Ok(SquareMat {
            order: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| (0..n).map(|k| self.at(i, k) * rhs.at(k, j)).sum()))
                .collect(),
        })
    }

    /// Hadamard (element-wise) product. Fails when the orders differ.
    pub fn elem_mul(&self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        Ok(SquareMat {
            order: self.order,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a * b)
                .collect(),
        })
    }

    /// Multiplies every cell by a scalar. A zero scalar is accepted here,
    /// unlike [`scale_assign`](SquareMat::scale_assign).
    pub fn scalar_mul(&self, scalar: f64) -> SquareMat {
        SquareMat {
            order: self.order,
            cells: self.cells.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Divides every cell by a scalar. Fails on a zero divisor.
    pub fn scalar_div(&self, scalar: f64) -> Result<SquareMat, SquareMatError> {
        if scalar == 0.0 {
            return Err(SquareMatError::InvalidArgument("division by zero".into()));
        }
        Ok(SquareMat {
            order: self.order,
            cells: self.cells.iter().map(|c| c / scalar).collect(),
        })
    }

    /// Floating-point remainder of every cell by an integer scalar. The
    /// sign follows the dividend. Fails on a zero modulus.
    pub fn scalar_rem(&self, scalar: i64) -> Result<SquareMat, SquareMatError> {
        if scalar == 0 {
            return Err(SquareMatError::InvalidArgument(
                "modulus must be non-zero".into(),
            ));
        }
        Ok(SquareMat {
            order: self.order,
            cells: self.cells.iter().map(|c| c % scalar as f64).collect(),
        })
    }

    /// In-place element-wise sum.
    pub fn add_assign(&mut self, rhs: &SquareMat) -> Result<&mut SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        for (a, b) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *a += b;
        }
        Ok(self)
    }

    /// In-place element-wise difference.
    pub fn sub_assign(&mut self, rhs: &SquareMat) -> Result<&mut SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        for (a, b) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *a -= b;
        }
        Ok(self)
    }

    /// In-place matrix product.
    pub fn mul_assign(&mut self, rhs: &SquareMat) -> Result<&mut SquareMat, SquareMatError> {
        let product = self.mul(rhs)?;
        self.cells = product.cells;
        Ok(self)
    }

    /// In-place Hadamard product.
    pub fn elem_mul_assign(&mut self, rhs: &SquareMat) -> Result<&mut SquareMat, SquareMatError> {
        self.check_order(rhs)?;
        for (a, b) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *a *= b;
        }
        Ok(self)
    }

    /// In-place scalar multiply. Rejects a zero scalar, unlike
    /// [`scalar_mul`](SquareMat::scalar_mul) which accepts one; the
    /// asymmetry is part of the operation contract.
    pub fn scale_assign(&mut self, scalar: f64) -> Result<&mut SquareMat, SquareMatError> {
        if scalar == 0.0 {
            return Err(SquareMatError::InvalidArgument(
                "scalar must be non-zero".into(),
            ));
        }
        for c in self.cells.iter_mut() {
            *c *= scalar;
        }
        Ok(self)
    }

    /// In-place scalar divide. Fails on a zero divisor.
    pub fn div_assign(&mut self, scalar: f64) -> Result<&mut SquareMat, SquareMatError> {
        if scalar == 0.0 {
            return Err(SquareMatError::InvalidArgument("division by zero".into()));
        }
        for c in self.cells.iter_mut() {
            *c /= scalar;
        }
        Ok(self)
    }

    /// In-place floating-point remainder. Fails on a zero modulus.
    pub fn rem_assign(&mut self, scalar: i64) -> Result<&mut SquareMat, SquareMatError> {
        if scalar == 0 {
            return Err(SquareMatError::InvalidArgument(
                "modulus must be non-zero".into(),
            ));
        }
        for c in self.cells.iter_mut() {
            *c %= scalar as f64;
        }
        Ok(self)
    }

    pub fn transpose(&self) -> SquareMat {
        SquareMat {
            order: self.order,
            cells: (0..self.order)
                .flat_map(|c| (0..self.order).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Raises the matrix to a non-negative integer power by repeated
    /// multiplication against the running result. Power 0 yields the
    /// identity, power 1 a copy.
    pub fn pow(&self, power: i32) -> Result<SquareMat, SquareMatError> {
        if power < 0 {
            return Err(SquareMatError::InvalidArgument(
                "power must be non-negative".into(),
            ));
        }
        if power == 0 {
            return SquareMat::identity(self.order);
        }

        let mut result = self.clone();
        for _ in 1..power {
            result = result.mul(self)?;
        }
        Ok(result)
    }

    /// Determinant by cofactor expansion along the first row. Exponential
    /// in the order; meant for small matrices.
    pub fn determinant(&self) -> f64 {
        if self.order == 1 {
            return self.cells[0];
        }
        if self.order == 2 {
            return self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0);
        }

        let mut det = 0.0;
        for j in 0..self.order {
            // minor: drop row 0 and column j
            let mut cells = Vec::with_capacity((self.order - 1) * (self.order - 1));
            for i in 1..self.order {
                for k in 0..self.order {
                    if k != j {
                        cells.push(self.at(i, k));
                    }
                }
            }
            let minor = SquareMat {
                order: self.order - 1,
                cells,
            };
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.at(0, j) * minor.determinant();
        }
        det
    }

    /// Sum of all cells; the aggregate all comparisons are defined on.
    pub fn sum(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Adds 1.0 to every cell, returning the mutated matrix.
    pub fn increment(&mut self) -> &mut SquareMat {
        for c in self.cells.iter_mut() {
            *c += 1.0;
        }
        self
    }

    /// Adds 1.0 to every cell, returning the pre-mutation copy.
    pub fn post_increment(&mut self) -> SquareMat {
        let before = self.clone();
        self.increment();
        before
    }

    /// Subtracts 1.0 from every cell, returning the mutated matrix.
    pub fn decrement(&mut self) -> &mut SquareMat {
        for c in self.cells.iter_mut() {
            *c -= 1.0;
        }
        self
    }

    /// Subtracts 1.0 from every cell, returning the pre-mutation copy.
    pub fn post_decrement(&mut self) -> SquareMat {
        let before = self.clone();
        self.decrement();
        before
    }
}

impl ops::Add<&SquareMat> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn add(self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        SquareMat::add(self, rhs)
    }
}

impl ops::Sub<&SquareMat> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn sub(self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        SquareMat::sub(self, rhs)
    }
}

impl ops::Mul<&SquareMat> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn mul(self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        SquareMat::mul(self, rhs)
    }
}

impl ops::Mul<f64> for &SquareMat {
    type Output = SquareMat;

    fn mul(self, scalar: f64) -> SquareMat {
        self.scalar_mul(scalar)
    }
}

impl ops::Mul<&SquareMat> for f64 {
    type Output = SquareMat;

    fn mul(self, rhs: &SquareMat) -> SquareMat {
        rhs.scalar_mul(self)
    }
}

impl ops::Div<f64> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn div(self, scalar: f64) -> Result<SquareMat, SquareMatError> {
        self.scalar_div(scalar)
    }
}

// `%` with a matrix operand is the Hadamard product, with an integer
// operand the cell-wise remainder.
impl ops::Rem<&SquareMat> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn rem(self, rhs: &SquareMat) -> Result<SquareMat, SquareMatError> {
        self.elem_mul(rhs)
    }
}

impl ops::Rem<i64> for &SquareMat {
    type Output = Result<SquareMat, SquareMatError>;

    fn rem(self, scalar: i64) -> Result<SquareMat, SquareMatError> {
        self.scalar_rem(scalar)
    }
}

impl ops::Neg for &SquareMat {
    type Output = SquareMat;

    fn neg(self) -> SquareMat {
        SquareMat {
            order: self.order,
            cells: self.cells.iter().map(|c| -c).collect(),
        }
    }
}

// Comparisons are defined on the cell sums, not element-wise: two
// structurally different matrices with equal totals compare equal, and
// matrices of different orders are comparable.
impl PartialEq for SquareMat {
    fn eq(&self, rhs: &SquareMat) -> bool {
        self.sum() == rhs.sum()
    }
}

impl PartialOrd for SquareMat {
    fn partial_cmp(&self, rhs: &SquareMat) -> Option<Ordering> {
        self.sum().partial_cmp(&rhs.sum())
    }
}

impl Display for SquareMat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.order) {
            for cell in row {
                write!(f, "{}\t", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
