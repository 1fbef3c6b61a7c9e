use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

#[cfg(feature = "blas")]
use crate::algebra::dense::BlasFloatT;

/// Core traits for internal floating point values.
///
/// This trait defines a subset of bounds for `FloatT`, which is preferred
/// throughout the crate.  When the "blas" feature is enabled, `FloatT` is
/// additionally restricted to the f32/f64 types supported by BLAS.
pub trait CoreFloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

// when "blas" is enabled the trait bound tightens to f32/f64, since
// there is no external BLAS support for anything else

cfg_if::cfg_if! {
    if #[cfg(not(feature="blas"))] {
        /// Main trait for floating point types used throughout the crate.
        ///
        /// Implemented for any scalar satisfying [`CoreFloatT`] in the default
        /// build, and for f32/f64 only when the dense kernels are routed
        /// through an external BLAS via the `blas` feature.
        pub trait FloatT: CoreFloatT {}
    } else {
        /// Main trait for floating point types used throughout the crate.
        ///
        /// Restricted to f32/f64 because the crate was compiled with the
        /// `blas` feature.
        pub trait FloatT: CoreFloatT + BlasFloatT {}
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature="blas")] {
        impl<T> FloatT for T where T: CoreFloatT + BlasFloatT {}
    } else {
        impl<T> FloatT for T where T: CoreFloatT {}
    }
}
