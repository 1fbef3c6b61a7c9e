#![allow(non_snake_case)]

//! The unified matrix type and its per-variant kernel dispatch.

use crate::algebra::*;
use enum_dispatch::*;

mod concat;
mod convert;
mod kernels;

/// Column kernels implemented by every storage variant.
///
/// Implemented on the four concrete storage types and dispatched per
/// variant from [`AnyMatrix`].  Column indices are checked; all methods
/// panic on an out-of-range `j` or a destination of the wrong length.
/// The in-place column mutators (`scale_col`, `translate_col`) panic on
/// symmetric storage, where a single stored entry serves two logical
/// columns.
#[enum_dispatch]
pub trait MatrixOps<T>
where
    T: FloatT,
{
    /// Sets every stored entry to `val`.
    fn set_all(&mut self, val: T);

    /// Sum of the entries of logical column `j`.
    fn col_sum(&self, j: usize) -> T;

    /// Sum of absolute values of logical column `j`.
    fn col_abs_sum(&self, j: usize) -> T;

    /// Sum of squares of logical column `j`.
    fn col_sumsq(&self, j: usize) -> T;

    /// Inner product of logical column `j` with the vector `yk`.
    fn col_dot(&self, j: usize, yk: &[T]) -> T;

    /// `y += alpha * X(:,j)`, the destination owned exclusively by the
    /// caller.
    fn col_axpy(&self, alpha: T, j: usize, y: &mut [T]);

    /// Scales column `j` in place.  General matrices only.
    fn scale_col(&mut self, j: usize, alpha: T);

    /// Adds `alpha` to every entry of column `j` in place.  General
    /// matrices only.
    fn translate_col(&mut self, j: usize, alpha: T);

    /// `zk = alpha * op(X) * yk + beta * zk`, where `op` is selected by
    /// `shape` and ignored for symmetric storage.  Any `beta` within
    /// machine epsilon of zero zeroes `zk` outright, so an uninitialized
    /// destination is safe.
    fn gemv_slice(&self, shape: MatrixShape, alpha: T, yk: &[T], beta: T, zk: &mut [T]);
}

/// A real matrix in one of four storage variants:
/// sparse/dense × general/symmetric.
///
/// Symmetric variants store a single triangle (tagged `Triu`/`Tril`) and
/// derive the mirrored entries on the fly; they never materialize the
/// opposite triangle except through
/// [`symmetric_to_general`](AnyMatrix::symmetric_to_general).
///
/// The kernels of [`MatrixOps`] dispatch on the variant.  Conversion
/// between variants is in place via [`to_dense`](AnyMatrix::to_dense),
/// [`to_sparse`](AnyMatrix::to_sparse) and
/// [`symmetric_to_general`](AnyMatrix::symmetric_to_general).
#[enum_dispatch(MatrixOps<T>)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix<T = f64>
where
    T: FloatT,
{
    /// compressed sparse column, all entries stored
    SparseGeneral(CscMatrix<T>),
    /// compressed sparse column, one triangle stored
    SparseSymmetric(SymCscMatrix<T>),
    /// dense column-major, all entries stored
    DenseGeneral(Matrix<T>),
    /// dense column-major, one triangle meaningful
    DenseSymmetric(SymMatrix<T>),
}

impl<T> AnyMatrix<T>
where
    T: FloatT,
{
    /// Allocates an `m` x `n` container in the requested format, with
    /// room for `nnz` stored entries when sparse.  Sparse containers are
    /// empty shells whose column pointers the caller fills; dense
    /// containers are zeroed.
    pub fn alloc(
        format: MatrixFormat,
        symmetry: MatrixSymmetry,
        m: usize,
        n: usize,
        nnz: usize,
    ) -> Result<Self, MatrixBuildError> {
        if m == 0 || n == 0 {
            return Err(MatrixBuildError::ZeroDimension);
        }
        if symmetry != MatrixSymmetry::General && m != n {
            return Err(MatrixBuildError::NotSquare);
        }

        let out = match (format, symmetry.triangle()) {
            (MatrixFormat::Sparse, None) => CscMatrix::spalloc(m, n, nnz).into(),
            (MatrixFormat::Sparse, Some(uplo)) => {
                //container only; triangle shape is established as the
                //caller fills it
                let mat = CscMatrix::spalloc(m, n, nnz);
                AnyMatrix::SparseSymmetric(SymCscMatrix { mat, uplo })
            }
            (MatrixFormat::Dense, None) => Matrix::zeros((m, n)).into(),
            (MatrixFormat::Dense, Some(uplo)) => {
                SymMatrix::new(Matrix::zeros((m, n)), uplo).into()
            }
        };
        Ok(out)
    }

    /// Identity matrix of size `n` in the requested storage format.
    pub fn eye(format: MatrixFormat, n: usize) -> Result<Self, MatrixBuildError> {
        if n == 0 {
            return Err(MatrixBuildError::ZeroDimension);
        }
        let out = match format {
            MatrixFormat::Sparse => CscMatrix::identity(n).into(),
            MatrixFormat::Dense => Matrix::identity(n).into(),
        };
        Ok(out)
    }

    /// number of stored entries: structural nonzeros when sparse,
    /// `m * n` when dense
    pub fn nnz(&self) -> usize {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.nnz(),
            AnyMatrix::SparseSymmetric(sym) => sym.mat.nnz(),
            AnyMatrix::DenseGeneral(mat) => mat.data.len(),
            AnyMatrix::DenseSymmetric(sym) => sym.mat.data.len(),
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(
            self,
            AnyMatrix::SparseGeneral(_) | AnyMatrix::SparseSymmetric(_)
        )
    }

    pub fn is_dense(&self) -> bool {
        !self.is_sparse()
    }

    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AnyMatrix::SparseSymmetric(_) | AnyMatrix::DenseSymmetric(_)
        )
    }

    /// the stored triangle for symmetric variants, `None` otherwise
    pub fn triangle(&self) -> Option<MatrixTriangle> {
        match self {
            AnyMatrix::SparseSymmetric(sym) => Some(sym.triangle()),
            AnyMatrix::DenseSymmetric(sym) => Some(sym.triangle()),
            _ => None,
        }
    }

    /// Reallocates the stored-entry buffers for `nnz` entries, truncating
    /// or zero-extending.  A container-level operation: dimensions and
    /// column pointers are left to the caller.
    pub fn resize_nnz(&mut self, nnz: usize) {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.resize_nnz(nnz),
            AnyMatrix::SparseSymmetric(sym) => sym.mat.resize_nnz(nnz),
            AnyMatrix::DenseGeneral(mat) => mat.data.resize(nnz, T::zero()),
            AnyMatrix::DenseSymmetric(sym) => sym.mat.data.resize(nnz, T::zero()),
        }
    }

    /// Restores ascending row order within every column of sparse
    /// storage; a no-op when dense.
    pub fn sort_columns(&mut self) {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.sort_columns(),
            AnyMatrix::SparseSymmetric(sym) => sym.mat.sort_columns(),
            _ => {}
        }
    }

    /// Checks the sparse storage invariants; always `Ok` when dense.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.check_format(),
            AnyMatrix::SparseSymmetric(sym) => sym.mat.check_format(),
            _ => Ok(()),
        }
    }

    /// 2-norm of logical column `j`.
    pub fn col_norm(&self, j: usize) -> T {
        T::sqrt(self.col_sumsq(j))
    }
}

impl<T> ShapedMatrix for AnyMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.nrows(),
            AnyMatrix::SparseSymmetric(sym) => sym.nrows(),
            AnyMatrix::DenseGeneral(mat) => mat.nrows(),
            AnyMatrix::DenseSymmetric(sym) => sym.nrows(),
        }
    }
    fn ncols(&self) -> usize {
        match self {
            AnyMatrix::SparseGeneral(mat) => mat.ncols(),
            AnyMatrix::SparseSymmetric(sym) => sym.ncols(),
            AnyMatrix::DenseGeneral(mat) => mat.ncols(),
            AnyMatrix::DenseSymmetric(sym) => sym.ncols(),
        }
    }
}
