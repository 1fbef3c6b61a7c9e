#![allow(non_snake_case)]

//! In-place storage conversions between the four variants.
//!
//! Each conversion returns `true` if the representation changed and
//! `false` for a no-op, leaving the matrix untouched.

use crate::algebra::*;

impl<T> AnyMatrix<T>
where
    T: FloatT,
{
    /// Sparse → dense scatter, preserving symmetry tagging.  Returns
    /// `false` when already dense.
    pub fn to_dense(&mut self) -> bool {
        let out = match &*self {
            AnyMatrix::SparseGeneral(sp) => {
                AnyMatrix::DenseGeneral(scatter_to_dense(sp))
            }
            AnyMatrix::SparseSymmetric(sym) => {
                //only the tagged triangle is populated
                let mat = scatter_to_dense(sym.storage());
                AnyMatrix::DenseSymmetric(SymMatrix::new(mat, sym.triangle()))
            }
            _ => return false,
        };
        *self = out;
        true
    }

    /// Dense → sparse gather, keeping entries with `|v| > threshold` and
    /// preserving symmetry tagging.  Returns `false` when already sparse.
    pub fn to_sparse(&mut self, threshold: T) -> bool {
        let out = match &*self {
            AnyMatrix::DenseGeneral(mat) => {
                let sp = gather_to_sparse(mat, None, threshold);
                AnyMatrix::SparseGeneral(sp)
            }
            AnyMatrix::DenseSymmetric(sym) => {
                let uplo = sym.triangle();
                let sp = gather_to_sparse(sym.storage(), Some(uplo), threshold);
                AnyMatrix::SparseSymmetric(SymCscMatrix::new(sp, uplo))
            }
            _ => return false,
        };
        *self = out;
        true
    }

    /// Materializes the mirrored triangle, turning symmetric storage into
    /// general.  Returns `false` when already general.
    pub fn symmetric_to_general(&mut self) -> bool {
        let out = match &*self {
            AnyMatrix::SparseSymmetric(sym) => {
                AnyMatrix::SparseGeneral(sym_csc_to_general(sym))
            }
            AnyMatrix::DenseSymmetric(sym) => {
                let mut mat = sym.storage().clone();
                for j in 0..mat.n {
                    for (k, v) in sym.mirror_iter(j) {
                        mat[(k, j)] = v;
                    }
                }
                AnyMatrix::DenseGeneral(mat)
            }
            _ => return false,
        };
        *self = out;
        true
    }
}

fn scatter_to_dense<T: FloatT>(sp: &CscMatrix<T>) -> Matrix<T> {
    let mut out = Matrix::zeros(sp.size());
    for j in 0..sp.n {
        for pos in sp.col_range(j) {
            out[(sp.rowval[pos], j)] = sp.nzval[pos];
        }
    }
    out
}

/// Gathers the dense buffer column by column, visiting only the tagged
/// triangle when `uplo` is given.  Row order within each column is
/// ascending by construction.
fn gather_to_sparse<T: FloatT>(
    mat: &Matrix<T>,
    uplo: Option<MatrixTriangle>,
    threshold: T,
) -> CscMatrix<T> {
    let (m, n) = mat.size();
    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    let mut nzval = Vec::new();

    colptr.push(0);
    for j in 0..n {
        let rows = match uplo {
            None => 0..m,
            Some(MatrixTriangle::Triu) => 0..(j + 1),
            Some(MatrixTriangle::Tril) => j..m,
        };
        for i in rows {
            let v = mat[(i, j)];
            if T::abs(v) > threshold {
                rowval.push(i);
                nzval.push(v);
            }
        }
        colptr.push(rowval.len());
    }
    CscMatrix::new(m, n, colptr, rowval, nzval)
}

/// Rebuilds every logical column as stored segment + mirror probes.  The
/// probe rows extend the stored rows on the far side of the diagonal, so
/// each output column is assembled already sorted.
fn sym_csc_to_general<T: FloatT>(sym: &SymCscMatrix<T>) -> CscMatrix<T> {
    let sp = sym.storage();
    let n = sp.n;

    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    let mut nzval = Vec::new();

    colptr.push(0);
    for j in 0..n {
        let push_mirrors = |rowval: &mut Vec<usize>, nzval: &mut Vec<T>| {
            for k in sym.opposite_cols(j) {
                if let Some(v) = sym.mirror(j, k) {
                    rowval.push(k);
                    nzval.push(v);
                }
            }
        };

        match sym.triangle() {
            //upper: stored rows <= j come first, mirrored rows > j after
            MatrixTriangle::Triu => {
                for pos in sp.col_range(j) {
                    rowval.push(sp.rowval[pos]);
                    nzval.push(sp.nzval[pos]);
                }
                push_mirrors(&mut rowval, &mut nzval);
            }
            //lower: mirrored rows < j come first, stored rows >= j after
            MatrixTriangle::Tril => {
                push_mirrors(&mut rowval, &mut nzval);
                for pos in sp.col_range(j) {
                    rowval.push(sp.rowval[pos]);
                    nzval.push(sp.nzval[pos]);
                }
            }
        }
        colptr.push(rowval.len());
    }
    CscMatrix::new(sp.m, n, colptr, rowval, nzval)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym_triu_3x3() -> AnyMatrix<f64> {
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
        SymCscMatrix::new(A, MatrixTriangle::Triu).into()
    }

    #[test]
    fn test_symmetric_to_general_sparse() {
        let mut A = sym_triu_3x3();
        assert!(A.symmetric_to_general());
        assert!(!A.is_symmetric());
        assert!(A.check_format().is_ok());

        match &A {
            AnyMatrix::SparseGeneral(sp) => {
                assert_eq!(sp.nnz(), 8);
                assert_eq!(sp.get_entry((1, 0)), Some(1.0));
                assert_eq!(sp.get_entry((2, 1)), Some(2.0));
                assert_eq!(sp.get_entry((2, 0)), None);
            }
            _ => panic!("expected sparse general"),
        }

        //second call is a no-op
        assert!(!A.symmetric_to_general());
    }

    #[test]
    fn test_symmetric_to_general_dense() {
        let mut A = sym_triu_3x3();
        assert!(A.to_dense());
        assert!(A.symmetric_to_general());
        match &A {
            AnyMatrix::DenseGeneral(mat) => {
                assert_eq!(mat[(1, 0)], 1.0);
                assert_eq!(mat[(2, 1)], 2.0);
                assert_eq!(mat[(2, 0)], 0.0);
                assert_eq!(mat[(0, 1)], 1.0);
            }
            _ => panic!("expected dense general"),
        }
    }

    #[test]
    fn test_sparse_dense_round_trip() {
        let sp = CscMatrix::new(2, 3, vec![0, 1, 2, 3], vec![0, 1, 0], vec![1., 3., 2.]);
        let orig = AnyMatrix::SparseGeneral(sp);

        let mut A = orig.clone();
        assert!(A.to_dense());
        assert!(!A.to_dense());
        assert_eq!(A.nnz(), 6);
        assert!(A.to_sparse(0.0));
        assert_eq!(A, orig);
    }

    #[test]
    fn test_to_sparse_threshold_is_strict() {
        let mat = Matrix::from(&[
            [0.5, 0.0], //
            [1.0, 2.0],
        ]);
        let mut A = AnyMatrix::DenseGeneral(mat);
        A.to_sparse(0.5);
        assert_eq!(A.nnz(), 2); // 0.5 itself excluded
    }

    #[test]
    fn test_symmetric_round_trip_keeps_triangle() {
        let mut A = sym_triu_3x3();
        let orig = A.clone();
        assert!(A.to_dense());
        assert_eq!(A.triangle(), Some(MatrixTriangle::Triu));
        assert!(A.to_sparse(0.0));
        assert_eq!(A, orig);
    }
}
