#![allow(non_snake_case)]

use crate::algebra::*;

impl<T: FloatT> MatrixOps<T> for Matrix<T> {
    fn set_all(&mut self, val: T) {
        self.data.set(val);
    }

    fn col_sum(&self, j: usize) -> T {
        self.col_slice(j).sum()
    }

    fn col_abs_sum(&self, j: usize) -> T {
        self.col_slice(j).norm_one()
    }

    fn col_sumsq(&self, j: usize) -> T {
        self.col_slice(j).sumsq()
    }

    fn col_dot(&self, j: usize, yk: &[T]) -> T {
        assert_eq!(yk.len(), self.m);
        self.col_slice(j).dot(yk)
    }

    fn col_axpy(&self, alpha: T, j: usize, y: &mut [T]) {
        assert_eq!(y.len(), self.m);
        y.axpby(alpha, self.col_slice(j), T::one());
    }

    fn scale_col(&mut self, j: usize, alpha: T) {
        self.col_slice_mut(j).scale(alpha);
    }

    fn translate_col(&mut self, j: usize, alpha: T) {
        self.col_slice_mut(j).translate(alpha);
    }

    fn gemv_slice(&self, shape: MatrixShape, alpha: T, yk: &[T], beta: T, zk: &mut [T]) {
        match shape {
            MatrixShape::N => {
                assert_eq!(yk.len(), self.n);
                assert_eq!(zk.len(), self.m);
            }
            MatrixShape::T => {
                assert_eq!(yk.len(), self.m);
                assert_eq!(zk.len(), self.n);
            }
        }

        scale_or_reset(zk, beta);

        if alpha == T::zero() {
            return;
        }
        self.gemv(shape, alpha, yk, zk);
    }
}

impl<T: AtomicFloatT> Matrix<T> {
    /// `y += alpha * A(:,j)` with every destination write an atomic add.
    ///
    /// # Panics
    /// Panics if `j` or the length of `y` is out of range.
    pub fn col_axpy_atomic(&self, alpha: T, j: usize, y: &[T::Atomic]) {
        assert_eq!(y.len(), self.m);
        for (cell, &v) in y.iter().zip(self.col_slice(j)) {
            T::atomic_add(cell, alpha * v);
        }
    }
}

// Symmetric kernels: logical column j is the contiguous stored segment of
// column j plus a stride-m walk along row j of the stored triangle.

impl<T: FloatT> MatrixOps<T> for SymMatrix<T> {
    fn set_all(&mut self, val: T) {
        //entries outside the tagged triangle stay zero
        for j in 0..self.mat.n {
            let rng = self.own_range(j);
            self.mat.data[rng].set(val);
        }
    }

    fn col_sum(&self, j: usize) -> T {
        let mut sum = self.own_slice(j).sum();
        for (_, v) in self.mirror_iter(j) {
            sum += v;
        }
        sum
    }

    fn col_abs_sum(&self, j: usize) -> T {
        let mut asum = self.own_slice(j).norm_one();
        for (_, v) in self.mirror_iter(j) {
            asum += T::abs(v);
        }
        asum
    }

    fn col_sumsq(&self, j: usize) -> T {
        let mut ssq = self.own_slice(j).sumsq();
        for (_, v) in self.mirror_iter(j) {
            ssq += v * v;
        }
        ssq
    }

    fn col_dot(&self, j: usize, yk: &[T]) -> T {
        assert_eq!(yk.len(), self.mat.m);

        let yk_own = match self.uplo {
            MatrixTriangle::Triu => &yk[..=j],
            MatrixTriangle::Tril => &yk[j..],
        };
        let mut val = self.own_slice(j).dot(yk_own);
        for (k, v) in self.mirror_iter(j) {
            val += v * yk[k];
        }
        val
    }

    fn col_axpy(&self, alpha: T, j: usize, y: &mut [T]) {
        assert_eq!(y.len(), self.mat.m);

        match self.uplo {
            MatrixTriangle::Triu => y[..=j].axpby(alpha, self.own_slice(j), T::one()),
            MatrixTriangle::Tril => y[j..].axpby(alpha, self.own_slice(j), T::one()),
        };
        for (k, v) in self.mirror_iter(j) {
            y[k] += alpha * v;
        }
    }

    fn scale_col(&mut self, _j: usize, _alpha: T) {
        panic!("in-place column scaling requires a general matrix");
    }

    fn translate_col(&mut self, _j: usize, _alpha: T) {
        panic!("in-place column translation requires a general matrix");
    }

    fn gemv_slice(&self, _shape: MatrixShape, alpha: T, yk: &[T], beta: T, zk: &mut [T]) {
        // op(A) == A for symmetric A, so the shape flag is immaterial
        assert_eq!(yk.len(), self.mat.n);
        assert_eq!(zk.len(), self.mat.n);

        scale_or_reset(zk, beta);

        if alpha == T::zero() {
            return;
        }
        self.symv(alpha, yk, zk);
    }
}

impl<T: AtomicFloatT> SymMatrix<T> {
    /// `y += alpha * A(:,j)` (stored plus mirrored entries) with every
    /// destination write an atomic add.
    ///
    /// # Panics
    /// Panics if `j` or the length of `y` is out of range.
    pub fn col_axpy_atomic(&self, alpha: T, j: usize, y: &[T::Atomic]) {
        assert_eq!(y.len(), self.mat.m);

        let rows = match self.uplo {
            MatrixTriangle::Triu => 0..(j + 1),
            MatrixTriangle::Tril => j..self.mat.m,
        };
        for (i, &v) in rows.zip(self.own_slice(j)) {
            T::atomic_add(&y[i], alpha * v);
        }
        for (k, v) in self.mirror_iter(j) {
            T::atomic_add(&y[k], alpha * v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym_pair_3x3() -> (SymMatrix<f64>, SymMatrix<f64>) {
        // full matrix:
        //[4.0  1.0   ⋅ ]
        //[1.0  3.0  2.0]
        //[ ⋅   2.0  5.0]
        let triu = Matrix::from(&[
            [4., 1., 0.], //
            [0., 3., 2.],
            [0., 0., 5.],
        ]);
        let tril = Matrix::from(&[
            [4., 0., 0.], //
            [1., 3., 0.],
            [0., 2., 5.],
        ]);
        (
            SymMatrix::new(triu, MatrixTriangle::Triu),
            SymMatrix::new(tril, MatrixTriangle::Tril),
        )
    }

    #[test]
    fn test_sym_dense_col_reductions() {
        let (u, l) = sym_pair_3x3();
        for S in [u, l] {
            assert_eq!(S.col_sum(0), 5.0);
            assert_eq!(S.col_sum(1), 6.0);
            assert_eq!(S.col_sum(2), 7.0);
            assert_eq!(S.col_abs_sum(1), 6.0);
            assert_eq!(S.col_sumsq(1), 14.0);
            assert_eq!(S.col_dot(1, &[1., -1., 2.]), 2.0);
        }
    }

    #[test]
    fn test_sym_dense_gemv_matches_full() {
        // [[4,1,0],[1,3,2],[0,2,5]] * [1,-1,2] = [3, 2, 8]
        let yk = [1.0, -1.0, 2.0];
        let (u, l) = sym_pair_3x3();
        for S in [u, l] {
            let mut zk = [f64::NAN; 3];
            S.gemv_slice(MatrixShape::N, 1.0, &yk, 0.0, &mut zk);
            assert_eq!(zk, [3.0, 2.0, 8.0]);
        }
    }

    #[test]
    fn test_dense_col_axpy() {
        let A = Matrix::from(&[
            [1., 2.], //
            [3., 4.],
        ]);
        let mut y = vec![1.0, 1.0];
        A.col_axpy(2.0, 1, &mut y);
        assert_eq!(y, vec![5.0, 9.0]);

        let (u, _) = sym_pair_3x3();
        let mut y = vec![1.0; 3];
        u.col_axpy(2.0, 1, &mut y);
        assert_eq!(y, vec![3.0, 7.0, 5.0]);
    }

    #[test]
    fn test_gemv_beta_resets_nan() {
        let A = Matrix::from(&[
            [1., 0.], //
            [0., 1.],
        ]);
        let mut z = [f64::NAN, f64::NAN];
        A.gemv_slice(MatrixShape::N, 1.0, &[3., 4.], 0.0, &mut z);
        assert_eq!(z, [3.0, 4.0]);
    }
}
