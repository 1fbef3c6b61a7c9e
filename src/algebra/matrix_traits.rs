/// Shape queries common to every matrix storage type.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// `(nrows, ncols)` pair
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `nrows == ncols`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
