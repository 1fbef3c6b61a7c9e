#![allow(non_snake_case)]

//! Multi-column matrix-vector drivers and shared-destination updates.

use crate::algebra::*;

impl<T> AnyMatrix<T>
where
    T: FloatT,
{
    /// `z[:,k] = alpha * op(X) * y[:,k] + beta * z[:,k]` for a single
    /// column `k` of dense operands.
    ///
    /// # Panics
    /// Panics if `k` is out of range for either operand or the column
    /// heights are incompatible with `op(X)`.
    pub fn gemv_col(
        &self,
        shape: MatrixShape,
        alpha: T,
        y: &Matrix<T>,
        k: usize,
        beta: T,
        z: &mut Matrix<T>,
    ) {
        self.gemv_slice(shape, alpha, y.col_slice(k), beta, z.col_slice_mut(k));
    }

    /// `z = alpha * op(X) * y + beta * z`, column by column, data-parallel
    /// over the destination columns.  Each task owns its destination
    /// column exclusively; no synchronisation is involved.
    ///
    /// # Panics
    /// Panics if the operand column counts differ or the column heights
    /// are incompatible with `op(X)`.
    pub fn gemv(&self, shape: MatrixShape, alpha: T, y: &Matrix<T>, beta: T, z: &mut Matrix<T>) {
        assert_eq!(y.n, z.n);

        //skip the fork for a single column
        if y.n == 1 {
            self.gemv_col(shape, alpha, y, 0, beta, z);
            return;
        }

        let m = z.m;
        par_column_chunks(m, z.data_mut(), |k, zk| {
            self.gemv_slice(shape, alpha, y.col_slice(k), beta, zk);
        });
    }

    /// Inner products of logical column `j` against every column of `y`,
    /// returned as a `1 x y.n` row, computed in parallel.
    ///
    /// # Panics
    /// Panics if `j` is out of range or the column heights differ.
    pub fn col_dot_all(&self, j: usize, y: &Matrix<T>) -> Matrix<T> {
        let mut out = Matrix::zeros((1, y.n));

        if y.n == 1 {
            out.data[0] = self.col_dot(j, y.col_slice(0));
            return out;
        }

        par_column_map(out.data_mut(), |k| self.col_dot(j, y.col_slice(k)));
        out
    }
}

impl<T> AnyMatrix<T>
where
    T: AtomicFloatT,
{
    /// `y += alpha * X(:,j)` where `y` is shared between concurrent
    /// updaters: every destination write is an atomic add.
    ///
    /// # Panics
    /// Panics if `j` or the length of `y` is out of range.
    pub fn col_axpy_atomic(&self, alpha: T, j: usize, y: &[T::Atomic]) {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.col_axpy_atomic(alpha, j, y),
            AnyMatrix::SparseSymmetric(sym) => sym.col_axpy_atomic(alpha, j, y),
            AnyMatrix::DenseGeneral(mat) => mat.col_axpy_atomic(alpha, j, y),
            AnyMatrix::DenseSymmetric(sym) => sym.col_axpy_atomic(alpha, j, y),
        }
    }
}
