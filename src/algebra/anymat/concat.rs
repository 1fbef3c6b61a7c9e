//! Block concatenation of general matrices sharing a storage format.

use crate::algebra::*;

impl<T> AnyMatrix<T>
where
    T: FloatT,
{
    /// Vertical concatenation `[a; b]`.
    ///
    /// Both operands must be general and share a storage format, with
    /// equal column counts.
    pub fn vertcat(a: &Self, b: &Self) -> Result<Self, MatrixConcatenationError> {
        check_concat_pair(a, b)?;
        if a.ncols() != b.ncols() {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }

        match (a, b) {
            (AnyMatrix::SparseGeneral(a), AnyMatrix::SparseGeneral(b)) => Ok(a.vcat(b).into()),
            (AnyMatrix::DenseGeneral(a), AnyMatrix::DenseGeneral(b)) => Ok(a.vcat(b).into()),
            _ => unreachable!(),
        }
    }

    /// Horizontal concatenation `[a, b]`.
    ///
    /// Both operands must be general and share a storage format, with
    /// equal row counts.
    pub fn holzcat(a: &Self, b: &Self) -> Result<Self, MatrixConcatenationError> {
        check_concat_pair(a, b)?;
        if a.nrows() != b.nrows() {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }

        match (a, b) {
            (AnyMatrix::SparseGeneral(a), AnyMatrix::SparseGeneral(b)) => Ok(a.hcat(b).into()),
            (AnyMatrix::DenseGeneral(a), AnyMatrix::DenseGeneral(b)) => Ok(a.hcat(b).into()),
            _ => unreachable!(),
        }
    }
}

fn check_concat_pair<T: FloatT>(
    a: &AnyMatrix<T>,
    b: &AnyMatrix<T>,
) -> Result<(), MatrixConcatenationError> {
    if a.is_symmetric() || b.is_symmetric() {
        return Err(MatrixConcatenationError::NotGeneral);
    }
    if a.is_sparse() != b.is_sparse() {
        return Err(MatrixConcatenationError::FormatMismatch);
    }
    Ok(())
}
