use super::{FloatT, VectorMath};
use std::iter::zip;

/// `z *= beta`, treating any `beta` within machine epsilon of zero as an
/// exact zero so that stale or uninitialized destination values (NaN
/// included) are never propagated.
pub(crate) fn scale_or_reset<T: FloatT>(z: &mut [T], beta: T) {
    if T::abs(beta) > T::epsilon() {
        z.scale(beta);
    } else {
        z.set(T::zero());
    }
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        for x in &mut *self {
            *x = c;
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        for x in &mut *self {
            *x *= c;
        }
        self
    }

    fn translate(&mut self, c: T) -> &mut Self {
        for x in &mut *self {
            *x += c;
        }
        self
    }

    fn dot(&self, y: &[T]) -> T {
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm_one(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + T::abs(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        //handle b = 1 / 0 separately
        if b == T::zero() {
            for (y, x) in zip(&mut *self, x) {
                *y = a * (*x);
            }
        } else if b == T::one() {
            for (y, x) in zip(&mut *self, x) {
                *y += a * (*x);
            }
        } else {
            for (y, x) in zip(&mut *self, x) {
                *y = a * (*x) + b * (*y);
            }
        }
        self
    }
}
