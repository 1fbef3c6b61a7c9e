#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(clippy::too_many_arguments)]

// standard imports via blas-lapack-rs crates
extern crate blas_src;
use blas::*;

/// Scalars accepted by the external BLAS matrix-vector routines.
pub trait BlasFloatT:
    private::BlasFloatSealed
    + XgemvScalar
    + XsymvScalar
{}

impl BlasFloatT for f32 {}
impl BlasFloatT for f64 {}

mod private {
    pub trait BlasFloatSealed {}
    impl BlasFloatSealed for f32 {}
    impl BlasFloatSealed for f64 {}
}

// --------------------------------------
// ?gemv : general matrix-vector product
// --------------------------------------

pub trait XgemvScalar: Sized {
    fn xgemv(
        trans: u8, m: i32, n: i32, alpha: Self, a: &[Self], lda: i32,
        x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32,
    );
}

macro_rules! impl_blas_xgemv {
    ($T:ty, $XGEMV:path) => {
        impl XgemvScalar for $T {
            fn xgemv(
                trans: u8, m: i32, n: i32, alpha: Self, a: &[Self], lda: i32,
                x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32,
            ) {
                unsafe {
                    $XGEMV(trans, m, n, alpha, a, lda, x, incx, beta, y, incy);
                }
            }
        }
    };
}

impl_blas_xgemv!(f32, sgemv);
impl_blas_xgemv!(f64, dgemv);

// --------------------------------------
// ?symv : symmetric matrix-vector product
// --------------------------------------

pub trait XsymvScalar: Sized {
    fn xsymv(
        uplo: u8, n: i32, alpha: Self, a: &[Self], lda: i32,
        x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32,
    );
}

macro_rules! impl_blas_xsymv {
    ($T:ty, $XSYMV:path) => {
        impl XsymvScalar for $T {
            fn xsymv(
                uplo: u8, n: i32, alpha: Self, a: &[Self], lda: i32,
                x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32,
            ) {
                unsafe {
                    $XSYMV(uplo, n, alpha, a, lda, x, incx, beta, y, incy);
                }
            }
        }
    };
}

impl_blas_xsymv!(f32, ssymv);
impl_blas_xsymv!(f64, dsymv);
