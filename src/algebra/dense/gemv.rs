#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// `y += alpha * op(A) * x`, with `op` selected by `trans`.
    ///
    /// Dimensions are assumed compatible; callers check them.  Uses
    /// `?gemv` when the `blas` feature is enabled, a native kernel
    /// otherwise.
    pub(crate) fn gemv(&self, trans: MatrixShape, alpha: T, x: &[T], y: &mut [T]) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "blas")] {
                self.blas_gemv(trans, alpha, x, y);
            } else {
                self.native_gemv(trans, alpha, x, y);
            }
        }
    }

    #[allow(dead_code)] //unused with the blas feature
    fn native_gemv(&self, trans: MatrixShape, alpha: T, x: &[T], y: &mut [T]) {
        match trans {
            MatrixShape::N => {
                for (j, &xj) in x.iter().enumerate() {
                    y.axpby(alpha * xj, self.col_slice(j), T::one());
                }
            }
            MatrixShape::T => {
                for (j, yj) in y.iter_mut().enumerate() {
                    *yj += alpha * self.col_slice(j).dot(x);
                }
            }
        }
    }

    #[cfg(feature = "blas")]
    fn blas_gemv(&self, trans: MatrixShape, alpha: T, x: &[T], y: &mut [T]) {
        // standard BLAS ?gemv arguments, accumulating with beta = 1
        let trans = trans.as_blas_char();
        let m = self.m.try_into().unwrap();
        let n = self.n.try_into().unwrap();
        let lda = m;
        let incx = 1;
        let incy = 1;
        T::xgemv(
            trans,
            m,
            n,
            alpha,
            &self.data,
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
fn test_dense_gemv() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.],
    ]);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(MatrixShape::N, 2.0, &x, &mut y);
    assert_eq!(y, [27.0, 62.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.gemv(MatrixShape::T, 2.0, &x, &mut y);
    assert_eq!(y, [17.0, 22.0, 27.0]);
}
