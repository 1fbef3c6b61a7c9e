use crate::algebra::*;

impl<T: FloatT> Matrix<T> {
    /// Vertical concatenation `[self; bot]`.  Column counts must agree.
    pub(crate) fn vcat(&self, bot: &Self) -> Self {
        assert_eq!(self.n, bot.n);

        let mut out = Matrix::zeros((self.m + bot.m, self.n));
        for j in 0..self.n {
            let col = out.col_slice_mut(j);
            col[..self.m].copy_from_slice(self.col_slice(j));
            col[self.m..].copy_from_slice(bot.col_slice(j));
        }
        out
    }

    /// Horizontal concatenation `[self, right]`.  Row counts must agree.
    pub(crate) fn hcat(&self, right: &Self) -> Self {
        assert_eq!(self.m, right.m);

        //column-major, so the data buffers simply chain
        let mut data = Vec::with_capacity(self.data.len() + right.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&right.data);
        Matrix {
            m: self.m,
            n: self.n + right.n,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_vcat_hcat() {
        let a = Matrix::from(&[
            [1., 2.], //
            [3., 4.],
        ]);
        let b = Matrix::from(&[[5., 6.]]);

        let v = a.vcat(&b);
        assert_eq!(v.size(), (3, 2));
        assert_eq!(v.data, vec![1., 3., 5., 2., 4., 6.]);

        let c = Matrix::from(&[[7.], [8.]]);
        let h = a.hcat(&c);
        assert_eq!(h.size(), (2, 3));
        assert_eq!(h.data, vec![1., 3., 2., 4., 7., 8.]);
    }
}
