//! Fork-join parallel iteration over matrix columns.
//!
//! Destination aliasing follows one of two disciplines, never both on the
//! same buffer in the same call:
//! - *partitioned*: each task owns one destination column, so no
//!   synchronisation is needed ([`par_column_chunks`]);
//! - *shared + atomic*: all tasks accumulate into one vector of
//!   [`AtomicFloatT::Atomic`](crate::algebra::AtomicFloatT) cells.

use super::FloatT;
use rayon::prelude::*;

/// Applies `f(k, column_k)` to every length-`m` column of a column-major
/// buffer, in parallel.  Each invocation owns its column exclusively.
pub(crate) fn par_column_chunks<T, F>(m: usize, data: &mut [T], f: F)
where
    T: FloatT,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    data.par_chunks_mut(m)
        .enumerate()
        .for_each(|(k, colk)| f(k, colk));
}

/// Fills `out[k] = f(k)` for every k, in parallel.
pub(crate) fn par_column_map<T, F>(out: &mut [T], f: F)
where
    T: FloatT,
    F: Fn(usize) -> T + Send + Sync,
{
    out.par_iter_mut()
        .enumerate()
        .for_each(|(k, val)| *val = f(k));
}
