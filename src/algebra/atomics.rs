//! Atomic accumulation cells for shared destination vectors.
//!
//! Parallel column updates follow one of two aliasing disciplines: either
//! every task owns a disjoint slice of the destination (no synchronisation
//! required), or all tasks share one destination vector and every write
//! goes through an atomic add.  This module provides the cells for the
//! second discipline: a float stored as its bit pattern in an atomic
//! integer, accumulated with a compare-exchange loop.

use super::FloatT;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

macro_rules! impl_atomic_float {
    ($Name:ident, $Float:ty, $Bits:ty) => {
        /// A float cell supporting lock-free `+=` from many threads.
        #[derive(Debug, Default)]
        pub struct $Name($Bits);

        impl $Name {
            pub fn new(v: $Float) -> Self {
                Self(<$Bits>::new(v.to_bits()))
            }

            pub fn load(&self) -> $Float {
                <$Float>::from_bits(self.0.load(Ordering::Relaxed))
            }

            /// Atomically performs `*self += v`.
            pub fn fetch_add(&self, v: $Float) {
                let mut current = self.0.load(Ordering::Relaxed);
                loop {
                    let next = (<$Float>::from_bits(current) + v).to_bits();
                    match self.0.compare_exchange_weak(
                        current,
                        next,
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    ) {
                        Ok(_) => return,
                        Err(actual) => current = actual,
                    }
                }
            }
        }

        impl From<$Float> for $Name {
            fn from(v: $Float) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_atomic_float!(AtomicF32, f32, AtomicU32);
impl_atomic_float!(AtomicF64, f64, AtomicU64);

/// Floats with an associated atomic accumulation cell.
///
/// Implemented for f32 and f64.  The atomic axpy kernels are only available
/// for scalars satisfying this trait.
pub trait AtomicFloatT: FloatT {
    type Atomic: Send + Sync;

    fn atomic_new(v: Self) -> Self::Atomic;
    fn atomic_load(cell: &Self::Atomic) -> Self;
    /// Atomically performs `*cell += v`.
    fn atomic_add(cell: &Self::Atomic, v: Self);

    /// Rewraps a vector for shared accumulation.
    fn into_atomic(v: Vec<Self>) -> Vec<Self::Atomic> {
        v.into_iter().map(Self::atomic_new).collect()
    }

    /// Reads back a shared accumulator.
    fn from_atomic(v: &[Self::Atomic]) -> Vec<Self> {
        v.iter().map(Self::atomic_load).collect()
    }
}

macro_rules! impl_atomic_floatT {
    ($Float:ty, $Cell:ty) => {
        impl AtomicFloatT for $Float {
            type Atomic = $Cell;

            fn atomic_new(v: Self) -> Self::Atomic {
                <$Cell>::new(v)
            }
            fn atomic_load(cell: &Self::Atomic) -> Self {
                cell.load()
            }
            fn atomic_add(cell: &Self::Atomic, v: Self) {
                cell.fetch_add(v);
            }
        }
    };
}

impl_atomic_floatT!(f32, AtomicF32);
impl_atomic_floatT!(f64, AtomicF64);

#[test]
fn test_atomic_fetch_add() {
    let cell = AtomicF64::new(1.5);
    cell.fetch_add(2.25);
    cell.fetch_add(-0.75);
    assert_eq!(cell.load(), 3.0);
}
