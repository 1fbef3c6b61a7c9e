//! Matrix storage types and the math kernels implemented on them.
//!
//! All numeric work in the crate goes through the traits and types in this
//! module.  The concrete storage types are [`CscMatrix`] / [`SymCscMatrix`]
//! (column-compressed sparse) and [`Matrix`] / [`SymMatrix`] (dense,
//! column-major); [`AnyMatrix`] unifies the four behind a single tagged
//! type whose kernels dispatch per variant.

mod atomics;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod parallel;
mod vecmath;

mod anymat;
mod csc;
mod dense;

pub use atomics::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub(crate) use parallel::*;
pub(crate) use vecmath::scale_or_reset;

pub use anymat::*;
pub use csc::*;
pub use dense::*;

#[cfg(test)]
mod tests;
