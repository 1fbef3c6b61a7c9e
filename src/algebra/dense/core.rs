#![allow(non_snake_case)]

use crate::algebra::{FloatT, MatrixTriangle, ShapedMatrix, VectorMath};
use std::ops::{Index, IndexMut};

/// Dense matrix in column-major format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use anymat::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::new_from_slice(
///    (3, 3),                                       //size
///    &[1., 2., 0., 3., 0., 4., 5., 6., 7.],        //data, column major
///  );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

//convenience for building matrices in tests from row-major input
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut A = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                A[(i, j)] = v;
            }
        }
        A
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

/// A square dense matrix holding one triangle of a symmetric matrix.
///
/// The full column-major buffer is kept, with entries outside the tagged
/// triangle zero.  Kernels read only the tagged triangle, deriving the
/// opposite triangle by strided probes of the stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct SymMatrix<T = f64> {
    pub(crate) mat: Matrix<T>,
    pub(crate) uplo: MatrixTriangle,
}

impl<T> SymMatrix<T>
where
    T: FloatT,
{
    /// Wraps a dense matrix as symmetric, valid in the tagged triangle.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn new(mat: Matrix<T>, uplo: MatrixTriangle) -> Self {
        assert!(mat.is_square(), "symmetric matrix must be square");
        Self { mat, uplo }
    }

    /// the stored triangle
    pub fn triangle(&self) -> MatrixTriangle {
        self.uplo
    }

    /// the underlying storage, valid in the tagged triangle only
    pub fn storage(&self) -> &Matrix<T> {
        &self.mat
    }

    /// Linear data range of the stored segment of column `j`:
    /// rows `0..=j` for upper storage, rows `j..m` for lower.
    #[inline]
    pub(crate) fn own_range(&self, j: usize) -> std::ops::Range<usize> {
        let m = self.mat.m;
        match self.uplo {
            MatrixTriangle::Triu => (j * m)..(j * m + j + 1),
            MatrixTriangle::Tril => (j * m + j)..((j + 1) * m),
        }
    }

    #[inline]
    pub(crate) fn own_slice(&self, j: usize) -> &[T] {
        &self.mat.data[self.own_range(j)]
    }

    /// Entries of logical column `j` living in the *derived* triangle,
    /// as `(row, value)` pairs.  Each is read from position `(j, k)` of
    /// the stored triangle, a stride-`m` walk along row `j`.
    #[inline]
    pub(crate) fn mirror_iter(&self, j: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let m = self.mat.m;
        let cols = match self.uplo {
            MatrixTriangle::Triu => (j + 1)..self.mat.n,
            MatrixTriangle::Tril => 0..j,
        };
        cols.map(move |k| (k, self.mat.data[k * m + j]))
    }

    /// Value at logical position `(i, j)`, reflecting across the diagonal
    /// when the index falls in the derived triangle.
    pub fn get(&self, idx: (usize, usize)) -> T {
        let (i, j) = idx;
        let cmp = match self.uplo {
            MatrixTriangle::Triu => usize::le,
            MatrixTriangle::Tril => usize::ge,
        };
        if cmp(&i, &j) {
            self.mat[(i, j)]
        } else {
            self.mat[(j, i)]
        }
    }
}

impl<T> ShapedMatrix for SymMatrix<T> {
    fn nrows(&self) -> usize {
        self.mat.m
    }
    fn ncols(&self) -> usize {
        self.mat.n
    }
}

#[test]
fn test_dense_index_and_col_slice() {
    let A = Matrix::from(&[
        [1., 4.], //
        [2., 5.],
        [3., 6.],
    ]);
    assert_eq!(A.data, vec![1., 2., 3., 4., 5., 6.]);
    assert_eq!(A[(2, 1)], 6.);
    assert_eq!(A.col_slice(1), &[4., 5., 6.]);
}

#[test]
fn test_sym_dense_get() {
    // upper storage of [[4,1,0],[1,3,2],[0,2,5]]
    let A = Matrix::from(&[
        [4., 1., 0.], //
        [0., 3., 2.],
        [0., 0., 5.],
    ]);
    let S = SymMatrix::new(A, MatrixTriangle::Triu);

    assert_eq!(S.get((1, 0)), 1.);
    assert_eq!(S.get((0, 1)), 1.);
    assert_eq!(S.get((2, 1)), 2.);
    assert_eq!(S.get((2, 0)), 0.);

    assert_eq!(S.own_slice(1), &[1., 3.]);
    let mirrored: Vec<_> = S.mirror_iter(1).collect();
    assert_eq!(mirrored, vec![(2, 2.0)]);
}
