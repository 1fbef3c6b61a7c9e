//! __anymat__ is a small linear-algebra substrate for inversion pipelines:
//! a single real-valued matrix type that stores its entries either as a
//! column-compressed sparse structure or as a dense column-major buffer,
//! optionally exploiting symmetry by keeping only one triangle, together
//! with the column kernels (reductions, matrix-vector products, axpy-style
//! updates, concatenation, format conversion and MatrixMarket text I/O)
//! that solvers build on.
//!
//! The central type is [`AnyMatrix`](crate::algebra::AnyMatrix), a tagged
//! sum over the four supported storage variants
//! (sparse/dense × general/symmetric).  Kernels dispatch per variant;
//! symmetric storage holds a single triangle and derives the mirrored
//! entries on the fly.
//!
//! Multi-column products run data-parallel over destination columns.  For
//! accumulation into a single shared vector from many threads, atomic-add
//! variants are provided; see [`AtomicFloatT`](crate::algebra::AtomicFloatT).
//!
//! Compiling with the `blas` feature routes the dense matrix-vector
//! kernels through an external BLAS (`?gemv` / `?symv`); the default build
//! uses native kernels and needs no system libraries.

// matrix storage types and math kernels
pub mod algebra;

// MatrixMarket text codec
pub mod io;
