#![allow(non_snake_case)]

use crate::algebra::*;

impl<T: FloatT> MatrixOps<T> for CscMatrix<T> {
    fn set_all(&mut self, val: T) {
        self.nzval.set(val);
    }

    fn col_sum(&self, j: usize) -> T {
        assert!(j < self.n, "column index out of range");
        self.nzval[self.col_range(j)].sum()
    }

    fn col_abs_sum(&self, j: usize) -> T {
        assert!(j < self.n, "column index out of range");
        self.nzval[self.col_range(j)].norm_one()
    }

    fn col_sumsq(&self, j: usize) -> T {
        assert!(j < self.n, "column index out of range");
        self.nzval[self.col_range(j)].sumsq()
    }

    fn col_dot(&self, j: usize, yk: &[T]) -> T {
        assert!(j < self.n, "column index out of range");
        assert_eq!(yk.len(), self.m);

        let mut val = T::zero();
        for pos in self.col_range(j) {
            val += self.nzval[pos] * yk[self.rowval[pos]];
        }
        val
    }

    fn col_axpy(&self, alpha: T, j: usize, y: &mut [T]) {
        assert!(j < self.n, "column index out of range");
        assert_eq!(y.len(), self.m);

        for pos in self.col_range(j) {
            y[self.rowval[pos]] += alpha * self.nzval[pos];
        }
    }

    fn scale_col(&mut self, j: usize, alpha: T) {
        assert!(j < self.n, "column index out of range");
        let rng = self.col_range(j);
        self.nzval[rng].scale(alpha);
    }

    fn translate_col(&mut self, j: usize, alpha: T) {
        assert!(j < self.n, "column index out of range");
        let rng = self.col_range(j);
        self.nzval[rng].translate(alpha);
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

        match shape {
            //zk += alpha * A * yk, scattering down each column
            MatrixShape::N => {
                for (j, &yj) in yk.iter().enumerate() {
                    for pos in self.col_range(j) {
                        zk[self.rowval[pos]] += alpha * self.nzval[pos] * yj;
                    }
                }
            }
            //zk += alpha * A' * yk, gathering up each column
            MatrixShape::T => {
                for (j, zj) in zk.iter_mut().enumerate() {
                    let mut val = T::zero();
                    for pos in self.col_range(j) {
                        val += self.nzval[pos] * yk[self.rowval[pos]];
                    }
                    *zj += alpha * val;
                }
            }
        }
    }
}

impl<T: AtomicFloatT> CscMatrix<T> {
    /// `y += alpha * A(:,j)` with every destination write an atomic add.
    ///
    /// # Panics
    /// Panics if `j` or the length of `y` is out of range.
    pub fn col_axpy_atomic(&self, alpha: T, j: usize, y: &[T::Atomic]) {
        assert!(j < self.n, "column index out of range");
        assert_eq!(y.len(), self.m);

        for pos in self.col_range(j) {
            T::atomic_add(&y[self.rowval[pos]], alpha * self.nzval[pos]);
        }
    }
}

// Symmetric kernels: logical column j is the stored segment of column j
// plus one mirror probe per column on the opposite side of the diagonal.

impl<T: FloatT> MatrixOps<T> for SymCscMatrix<T> {
    fn set_all(&mut self, val: T) {
        self.mat.nzval.set(val);
    }

    fn col_sum(&self, j: usize) -> T {
        assert!(j < self.mat.n, "column index out of range");
        let mut sum = self.mat.nzval[self.mat.col_range(j)].sum();
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                sum += v;
            }
        }
        sum
    }

    fn col_abs_sum(&self, j: usize) -> T {
        assert!(j < self.mat.n, "column index out of range");
        let mut asum = self.mat.nzval[self.mat.col_range(j)].norm_one();
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                asum += T::abs(v);
            }
        }
        asum
    }

    fn col_sumsq(&self, j: usize) -> T {
        assert!(j < self.mat.n, "column index out of range");
        let mut ssq = self.mat.nzval[self.mat.col_range(j)].sumsq();
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                ssq += v * v;
            }
        }
        ssq
    }

    fn col_dot(&self, j: usize, yk: &[T]) -> T {
        assert!(j < self.mat.n, "column index out of range");
        assert_eq!(yk.len(), self.mat.m);

        let mut val = T::zero();
        for pos in self.mat.col_range(j) {
            val += self.mat.nzval[pos] * yk[self.mat.rowval[pos]];
        }
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                val += v * yk[k];
            }
        }
        val
    }

    fn col_axpy(&self, alpha: T, j: usize, y: &mut [T]) {
        assert!(j < self.mat.n, "column index out of range");
        assert_eq!(y.len(), self.mat.m);

        for pos in self.mat.col_range(j) {
            y[self.mat.rowval[pos]] += alpha * self.mat.nzval[pos];
        }
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                y[k] += alpha * v;
            }
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
        let n = self.mat.n;
        assert_eq!(yk.len(), n);
        assert_eq!(zk.len(), n);

        scale_or_reset(zk, beta);

        if alpha == T::zero() {
            return;
        }

        for j in 0..n {
            for pos in self.mat.col_range(j) {
                let i = self.mat.rowval[pos];
                let av = alpha * self.mat.nzval[pos];
                zk[i] += av * yk[j];

                if i != j {
                    //mirrored contribution; diagonal applied only once
                    zk[j] += av * yk[i];
                }
            }
        }
    }
}

impl<T: AtomicFloatT> SymCscMatrix<T> {
    /// `y += alpha * A(:,j)` (stored plus mirrored entries) with every
    /// destination write an atomic add.
    ///
    /// # Panics
    /// Panics if `j` or the length of `y` is out of range.
    pub fn col_axpy_atomic(&self, alpha: T, j: usize, y: &[T::Atomic]) {
        assert!(j < self.mat.n, "column index out of range");
        assert_eq!(y.len(), self.mat.m);

        for pos in self.mat.col_range(j) {
            T::atomic_add(&y[self.mat.rowval[pos]], alpha * self.mat.nzval[pos]);
        }
        for k in self.opposite_cols(j) {
            if let Some(v) = self.mirror(j, k) {
                T::atomic_add(&y[k], alpha * v);
            }
        }
    }
}
