//! A generic dense matrix with deep-copy value semantics.
//!
//! Used as working storage by the assignment solver; the element type is
//! anything `ndarray` can do linear algebra on.

use ndarray::{s, Array2, LinalgScalar};
use std::ops::{Index, IndexMut};

/// A resizable two-dimensional array backed by [`ndarray::Array2`].
///
/// `Clone` performs a deep copy. Out-of-bounds element access and
/// dimension mismatches are fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<A> {
    data: Array2<A>,
}

impl<A: LinalgScalar> Matrix<A> {
    /// A zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Matrix<A> {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Changes the shape, preserving the overlapping top-left submatrix.
    /// Newly exposed cells are zero-filled.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows() && cols == self.cols() {
            return;
        }
        let mut next = Array2::zeros((rows, cols));
        let r = rows.min(self.rows());
        let c = cols.min(self.cols());
        next.slice_mut(s![..r, ..c]).assign(&self.data.slice(s![..r, ..c]));
        self.data = next;
    }

    /// Zero-fills every cell.
    pub fn clear(&mut self) {
        self.data.fill(A::zero());
    }

    /// Zero-fills the matrix and writes ones on the main diagonal.
    pub fn set_identity(&mut self) {
        self.clear();
        for i in 0..self.rows().min(self.cols()) {
            self.data[[i, i]] = A::one();
        }
    }

    /// The identity matrix of the given order.
    pub fn identity(order: usize) -> Matrix<A> {
        let mut m = Matrix::new(order, order);
        m.set_identity();
        m
    }

    /// Bounds-checked element read.
    pub fn at(&self, row: usize, col: usize) -> A {
        assert!(
            row < self.rows() && col < self.cols(),
            "matrix access ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows(),
            self.cols()
        );
        self.data[[row, col]]
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut A {
        assert!(
            row < self.rows() && col < self.cols(),
            "matrix access ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows(),
            self.cols()
        );
        &mut self.data[[row, col]]
    }

    /// Sum of the main diagonal (over the shorter dimension when
    /// rectangular).
    pub fn trace(&self) -> A {
        self.data.diag().iter().fold(A::zero(), |acc, &x| acc + x)
    }

    /// Transposes in place: pads square, flips, trims to the flipped shape.
    pub fn transpose(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        let order = rows.max(cols);
        self.resize(order, order);
        self.data = self.data.t().to_owned();
        self.resize(cols, rows);
    }

    /// Matrix product. Requires `self.cols() == other.rows()`.
    pub fn product(&self, other: &Matrix<A>) -> Matrix<A> {
        assert_eq!(
            self.cols(),
            other.rows(),
            "matrix product dimension mismatch: {}x{} * {}x{}",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );
        Matrix {
            data: self.data.dot(&other.data),
        }
    }
}

impl<A: LinalgScalar> Index<(usize, usize)> for Matrix<A> {
    type Output = A;

    fn index(&self, (row, col): (usize, usize)) -> &A {
        &self.data[[row, col]]
    }
}

impl<A: LinalgScalar> IndexMut<(usize, usize)> for Matrix<A> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut A {
        &mut self.data[[row, col]]
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;

    #[test]
    fn new_is_zero_filled() {
        let m: Matrix<f32> = Matrix::new(2, 3);
        assert_eq!(2, m.rows());
        assert_eq!(3, m.cols());
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(0.0, m.at(r, c));
            }
        }
    }

    #[test]
    fn resize_preserves_top_left() {
        let mut m: Matrix<i32> = Matrix::new(2, 2);
        *m.at_mut(0, 0) = 1;
        *m.at_mut(0, 1) = 2;
        *m.at_mut(1, 0) = 3;
        *m.at_mut(1, 1) = 4;

        m.resize(3, 3);
        assert_eq!(1, m.at(0, 0));
        assert_eq!(4, m.at(1, 1));
        assert_eq!(0, m.at(2, 2));

        m.resize(1, 2);
        assert_eq!(1, m.at(0, 0));
        assert_eq!(2, m.at(0, 1));
    }

    #[test]
    fn identity_and_trace() {
        let m: Matrix<f32> = Matrix::identity(3);
        assert_eq!(1.0, m.at(1, 1));
        assert_eq!(0.0, m.at(1, 2));
        assert_eq!(3.0, m.trace());
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut m: Matrix<f32> = Matrix::identity(2);
        m.clear();
        assert_eq!(0.0, m.trace());
    }

    #[test]
    fn transpose_rectangular() {
        let mut m: Matrix<i32> = Matrix::new(2, 3);
        *m.at_mut(0, 1) = 5;
        *m.at_mut(1, 2) = 7;

        m.transpose();
        assert_eq!(3, m.rows());
        assert_eq!(2, m.cols());
        assert_eq!(5, m.at(1, 0));
        assert_eq!(7, m.at(2, 1));
    }

    #[test]
    fn product_known_result() {
        let mut a: Matrix<i32> = Matrix::new(2, 3);
        let mut b: Matrix<i32> = Matrix::new(3, 2);
        for c in 0..3 {
            *a.at_mut(0, c) = 1 + c as i32;
            *b.at_mut(c, 0) = 1;
            *b.at_mut(c, 1) = c as i32;
        }
        let p = a.product(&b);
        assert_eq!(2, p.rows());
        assert_eq!(2, p.cols());
        // (1 2 3) . (1 1 1) and (1 2 3) . (0 1 2)
        assert_eq!(6, p.at(0, 0));
        assert_eq!(8, p.at(0, 1));
    }

    #[test]
    #[should_panic]
    fn product_dimension_mismatch_panics() {
        let a: Matrix<f32> = Matrix::new(2, 3);
        let b: Matrix<f32> = Matrix::new(2, 3);
        let _ = a.product(&b);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let m: Matrix<f32> = Matrix::new(2, 2);
        let _ = m.at(2, 0);
    }
}
