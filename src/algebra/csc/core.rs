#![allow(non_snake_case)]

use crate::algebra::{FloatT, MatrixTriangle, ShapedMatrix, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use anymat::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  This constructor does __not__ ensure that row indices are
    /// all in bounds or that entries within each column appear in order of
    /// increasing row index; use [`check_format`](CscMatrix::check_format)
    /// and [`sort_columns`](CscMatrix::sort_columns) for that.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// Allocate space for an m x n matrix with `nnz` elements.
    ///
    /// All column pointers except the last are zero, so the result is only
    /// a container to be filled by the caller.
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Reallocates the row-index and value buffers for `nnz` stored
    /// entries, truncating or zero-extending as required.  Column pointers
    /// are left to the caller.
    pub fn resize_nnz(&mut self, nnz: usize) {
        self.rowval.resize(nnz, 0);
        self.nzval.resize(nnz, T::zero());
        self.colptr[self.n] = nnz;
    }

    /// The range of positions in `rowval`/`nzval` holding column `j`.
    #[inline]
    pub(crate) fn col_range(&self, j: usize) -> std::ops::Range<usize> {
        self.colptr[j]..self.colptr[j + 1]
    }

    /// Binary search for row `row` within the stored segment of column
    /// `col`, returning the position in `nzval` if the entry exists.
    ///
    /// Requires the column's row indices to be in ascending order.
    ///
    /// # Panics
    /// Panics if `col` is out of bounds.
    #[inline]
    pub(crate) fn find_in_col(&self, row: usize, col: usize) -> Option<usize> {
        let rng = self.col_range(col);
        let first = rng.start;
        match self.rowval[rng].binary_search(&row) {
            Ok(offset) => Some(first + offset),
            Err(_) => None,
        }
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.m && col < self.n);
        self.find_in_col(row, col).map(|pos| self.nzval[pos])
    }

    /// Restores the ascending row-index order within every column, e.g.
    /// after assembling entries from an unordered source such as a
    /// coordinate-format file.
    pub fn sort_columns(&mut self) {
        let mut entries: Vec<(usize, T)> = Vec::new();
        for j in 0..self.n {
            let rng = self.col_range(j);
            if rng.len() < 2 {
                continue;
            }
            entries.clear();
            entries.extend(
                self.rowval[rng.clone()]
                    .iter()
                    .copied()
                    .zip(self.nzval[rng.clone()].iter().copied()),
            );
            entries.sort_unstable_by_key(|&(row, _)| row);
            for (pos, &(row, val)) in rng.zip(entries.iter()) {
                self.rowval[pos] = row;
                self.nzval[pos] = val;
            }
        }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.col_range(col);
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowval);
            }
        }
        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// True if every stored entry lies in the given triangle
    /// (diagonal included).
    pub fn is_triangle(&self, uplo: MatrixTriangle) -> bool {
        for col in 0..self.n {
            let rows = &self.rowval[self.col_range(col)];
            let ok = match uplo {
                MatrixTriangle::Triu => rows.iter().all(|&row| row <= col),
                MatrixTriangle::Tril => rows.iter().all(|&row| row >= col),
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

/// A square sparse matrix storing one triangle of a symmetric matrix.
///
/// Only the entries of the tagged triangle (diagonal included) are stored;
/// values in the opposite triangle are derived by
/// [`mirror`](SymCscMatrix::mirror) probes, never materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct SymCscMatrix<T = f64> {
    pub(crate) mat: CscMatrix<T>,
    pub(crate) uplo: MatrixTriangle,
}

impl<T> SymCscMatrix<T>
where
    T: FloatT,
{
    /// Wraps a triangular CSC matrix as symmetric.
    ///
    /// # Panics
    /// Panics if the matrix is not square or stores entries outside the
    /// tagged triangle.
    pub fn new(mat: CscMatrix<T>, uplo: MatrixTriangle) -> Self {
        assert!(mat.is_square(), "symmetric matrix must be square");
        assert!(
            mat.is_triangle(uplo),
            "stored entries must lie in the tagged triangle"
        );
        Self { mat, uplo }
    }

    /// the stored triangle
    pub fn triangle(&self) -> MatrixTriangle {
        self.uplo
    }

    /// the underlying triangular storage
    pub fn storage(&self) -> &CscMatrix<T> {
        &self.mat
    }

    /// Looks up the stored entry that logically occupies position
    /// `(j, k)` of the full matrix, with `(j, k)` lying in the *derived*
    /// triangle, by searching row `j` within stored column `k`.
    ///
    /// O(log nnz_col) by binary search over the sorted row indices.
    #[inline]
    pub fn mirror(&self, j: usize, k: usize) -> Option<T> {
        self.mat.find_in_col(j, k).map(|pos| self.mat.nzval[pos])
    }

    /// Columns holding mirrored contributions to logical column `j`:
    /// everything right of `j` for upper storage, left of `j` for lower.
    #[inline]
    pub(crate) fn opposite_cols(&self, j: usize) -> std::ops::Range<usize> {
        match self.uplo {
            MatrixTriangle::Triu => (j + 1)..self.mat.n,
            MatrixTriangle::Tril => 0..j,
        }
    }
}

impl<T> ShapedMatrix for SymCscMatrix<T> {
    fn nrows(&self) -> usize {
        self.mat.m
    }
    fn ncols(&self) -> usize {
        self.mat.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}

#[test]
fn test_csc_sort_columns() {
    let mut A = CscMatrix::new(
        3,
        2,
        vec![0, 3, 4],
        vec![2, 0, 1, 1],
        vec![30., 10., 20., 40.],
    );
    assert!(A.check_format().is_err());
    A.sort_columns();
    assert!(A.check_format().is_ok());
    assert_eq!(A.rowval, vec![0, 1, 2, 1]);
    assert_eq!(A.nzval, vec![10., 20., 30., 40.]);
}

#[test]
fn test_sym_csc_mirror() {
    // full matrix:
    //[4.0  1.0   ⋅ ]
    //[1.0  3.0  2.0]
    //[ ⋅   2.0  5.0]
    let A = CscMatrix::new(
        3,
        3,
        vec![0, 1, 3, 5],
        vec![0, 0, 1, 1, 2],
        vec![4., 1., 3., 2., 5.],
    );
    let S = SymCscMatrix::new(A, MatrixTriangle::Triu);

    // entry (1,0) is derived from stored (0,1)
    assert_eq!(S.mirror(0, 1).unwrap(), 1.);
    // entry (2,1) is derived from stored (1,2)
    assert_eq!(S.mirror(1, 2).unwrap(), 2.);
    // (2,0)/(0,2) has no structural entry
    assert!(S.mirror(0, 2).is_none());
}
