
// All internal vector math goes through this trait, implemented
// generically on slices of FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)
pub trait VectorMath {
    type T;

    /// Set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise translation (scalar shift of all elements)
    fn translate(&mut self, c: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements
    fn sum(&self) -> Self::T;

    /// Sum of squares of the elements
    fn sumsq(&self) -> Self::T;

    /// One norm (sum of absolute values)
    fn norm_one(&self) -> Self::T;

    //blas-like vector ops
    //--------------------

    /// BLAS-like shift and scale in place.  Produces `self = a*x + b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}
