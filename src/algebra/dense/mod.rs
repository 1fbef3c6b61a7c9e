mod block_concatenate;
mod core;
mod gemv;
mod matrix_math;
mod symv;

pub use self::core::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "blas")] {
        mod blas;
        pub use blas::*;
    }
}
