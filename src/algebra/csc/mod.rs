mod block_concatenate;
mod core;
mod matrix_math;

pub use self::core::*;
