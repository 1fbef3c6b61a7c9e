use crate::algebra::*;

impl<T: FloatT> CscMatrix<T> {
    /// Vertical concatenation `[self; bot]`.  Column counts must agree.
    pub(crate) fn vcat(&self, bot: &Self) -> Self {
        assert_eq!(self.n, bot.n);

        let nnz = self.nnz() + bot.nnz();
        let mut out = CscMatrix::spalloc(self.m + bot.m, self.n, nnz);

        for j in 0..self.n {
            out.colptr[j + 1] = out.colptr[j];
            for pos in self.col_range(j) {
                out.rowval[out.colptr[j + 1]] = self.rowval[pos];
                out.nzval[out.colptr[j + 1]] = self.nzval[pos];
                out.colptr[j + 1] += 1;
            }
            for pos in bot.col_range(j) {
                //rows of the lower block shift down by the upper block height
                out.rowval[out.colptr[j + 1]] = bot.rowval[pos] + self.m;
                out.nzval[out.colptr[j + 1]] = bot.nzval[pos];
                out.colptr[j + 1] += 1;
            }
        }
        out
    }

    /// Horizontal concatenation `[self, right]`.  Row counts must agree.
    pub(crate) fn hcat(&self, right: &Self) -> Self {
        assert_eq!(self.m, right.m);

        let (lnnz, rnnz) = (self.nnz(), right.nnz());
        let mut out = CscMatrix::spalloc(self.m, self.n + right.n, lnnz + rnnz);

        out.colptr[..=self.n].copy_from_slice(&self.colptr);
        for (dst, src) in out.colptr[(self.n + 1)..].iter_mut().zip(&right.colptr[1..]) {
            *dst = src + lnnz;
        }
        out.rowval[..lnnz].copy_from_slice(&self.rowval);
        out.rowval[lnnz..].copy_from_slice(&right.rowval);
        out.nzval[..lnnz].copy_from_slice(&self.nzval);
        out.nzval[lnnz..].copy_from_slice(&right.nzval);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csc_vcat() {
        let a = CscMatrix::<f64>::identity(2);
        let b = CscMatrix::new(1, 2, vec![0, 1, 2], vec![0, 0], vec![3., 4.]);

        let v = a.vcat(&b);
        assert_eq!(v.size(), (3, 2));
        assert_eq!(v.colptr, vec![0, 2, 4]);
        assert_eq!(v.rowval, vec![0, 2, 1, 2]);
        assert_eq!(v.nzval, vec![1., 3., 1., 4.]);
        assert!(v.check_format().is_ok());
    }

    #[test]
    fn test_csc_hcat() {
        let a = CscMatrix::<f64>::identity(2);
        let b = CscMatrix::new(2, 1, vec![0, 2], vec![0, 1], vec![5., 6.]);

        let h = a.hcat(&b);
        assert_eq!(h.size(), (2, 3));
        assert_eq!(h.colptr, vec![0, 1, 2, 4]);
        assert_eq!(h.rowval, vec![0, 1, 0, 1]);
        assert_eq!(h.nzval, vec![1., 1., 5., 6.]);
        assert!(h.check_format().is_ok());
    }
}
