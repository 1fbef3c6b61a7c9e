#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> SymMatrix<T>
where
    T: FloatT,
{
    /// `y += alpha * A * x` for symmetric `A`, reading the stored triangle
    /// only.
    ///
    /// Dimensions are assumed compatible; callers check them.  Uses
    /// `?symv` when the `blas` feature is enabled, a native kernel
    /// otherwise.
    pub(crate) fn symv(&self, alpha: T, x: &[T], y: &mut [T]) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "blas")] {
                self.blas_symv(alpha, x, y);
            } else {
                self.native_symv(alpha, x, y);
            }
        }
    }

    #[allow(dead_code)] //unused with the blas feature
    fn native_symv(&self, alpha: T, x: &[T], y: &mut [T]) {
        let n = self.mat.n;
        for j in 0..n {
            let rows = match self.uplo {
                MatrixTriangle::Triu => 0..(j + 1),
                MatrixTriangle::Tril => j..n,
            };
            for (i, &v) in rows.zip(self.own_slice(j)) {
                y[i] += alpha * v * x[j];
                if i != j {
                    //mirrored contribution; diagonal applied only once
                    y[j] += alpha * v * x[i];
                }
            }
        }
    }

    #[cfg(feature = "blas")]
    fn blas_symv(&self, alpha: T, x: &[T], y: &mut [T]) {
        // standard BLAS ?symv arguments, accumulating with beta = 1
        let uplo = self.uplo.as_blas_char();
        let n = self.mat.n.try_into().unwrap();
        let lda = n;
        let incx = 1;
        let incy = 1;
        T::xsymv(
            uplo,
            n,
            alpha,
            &self.mat.data,
            lda,
            x,
            incx,
            T::one(),
            y,
            incy,
        );
    }
}

#[test]
fn test_dense_symv() {
    // upper storage of [[1,2,4],[2,3,5],[4,5,6]]
    let A = Matrix::from(&[
        [1., 2., 4.], //
        [0., 3., 5.],
        [0., 0., 6.],
    ]);
    let S = SymMatrix::new(A, MatrixTriangle::Triu);

    let x = vec![1., -2., 3.];
    let mut y = vec![-4., -1., 3.];
    S.symv(2.0, &x, &mut y);
    assert_eq!(y, [14.0, 21.0, 27.0]);
}
