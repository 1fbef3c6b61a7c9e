#![allow(non_snake_case)]

use crate::algebra::*;

// 4x4 symmetric test matrix, used through most of the variant checks:
//[ 2.0  -1.0   ⋅    0.5]
//[-1.0   3.0  1.0    ⋅ ]
//[  ⋅    1.0  4.0  -2.0]
//[ 0.5    ⋅  -2.0   1.0]
fn sym_triu_4x4() -> SymCscMatrix<f64> {
    let tri = CscMatrix::new(
        4,
        4,
        vec![0, 1, 3, 5, 8],
        vec![0, 0, 1, 1, 2, 0, 2, 3],
        vec![2., -1., 3., 1., 4., 0.5, -2., 1.],
    );
    SymCscMatrix::new(tri, MatrixTriangle::Triu)
}

fn all_variants() -> Vec<AnyMatrix<f64>> {
    let sym: AnyMatrix<f64> = sym_triu_4x4().into();

    let mut general = sym.clone();
    general.symmetric_to_general();
    let mut dense_sym = sym.clone();
    dense_sym.to_dense();
    let mut dense_general = general.clone();
    dense_general.to_dense();

    vec![sym, general, dense_sym, dense_general]
}

fn full_reference() -> Matrix<f64> {
    Matrix::from(&[
        [2.0, -1.0, 0.0, 0.5],
        [-1.0, 3.0, 1.0, 0.0],
        [0.0, 1.0, 4.0, -2.0],
        [0.5, 0.0, -2.0, 1.0],
    ])
}

#[test]
fn test_reductions_agree_across_variants() {
    let R = full_reference();
    for A in all_variants() {
        for j in 0..4 {
            assert_eq!(A.col_sum(j), R.col_sum(j), "col_sum, col {j}");
            assert_eq!(A.col_abs_sum(j), R.col_abs_sum(j), "col_abs_sum, col {j}");
            assert_eq!(A.col_sumsq(j), R.col_sumsq(j), "col_sumsq, col {j}");
            assert_eq!(A.col_norm(j), f64::sqrt(R.col_sumsq(j)), "col_norm, col {j}");
        }
    }
}

#[test]
fn test_col_dot_and_axpy_agree_across_variants() {
    let R = full_reference();
    let yk = [0.5, -1.0, 2.0, 1.5];

    for A in all_variants() {
        for j in 0..4 {
            assert_eq!(A.col_dot(j, &yk), R.col_dot(j, &yk), "col_dot, col {j}");

            let mut want = vec![1.0; 4];
            R.col_axpy(-2.0, j, &mut want);
            let mut got = vec![1.0; 4];
            A.col_axpy(-2.0, j, &mut got);
            assert_eq!(got, want, "col_axpy, col {j}");
        }
    }
}

#[test]
fn test_gemv_agrees_with_reference() {
    let R = full_reference();
    let y = Matrix::from(&[
        [1.0, 0.0, 2.0],
        [0.0, -1.0, 1.0],
        [2.0, 0.5, 0.0],
        [-1.0, 1.0, -1.0],
    ]);

    for shape in [MatrixShape::N, MatrixShape::T] {
        //symmetric, so op(X) is the same either way
        let mut want = Matrix::zeros((4, 3));
        R.gemv_slice(shape, 1.5, y.col_slice(0), 0.0, want.col_slice_mut(0));
        R.gemv_slice(shape, 1.5, y.col_slice(1), 0.0, want.col_slice_mut(1));
        R.gemv_slice(shape, 1.5, y.col_slice(2), 0.0, want.col_slice_mut(2));

        for A in all_variants() {
            let mut z = Matrix::zeros((4, 3));
            A.gemv(shape, 1.5, &y, 0.0, &mut z);
            assert_eq!(z, want);
        }
    }
}

#[test]
fn test_gemv_rectangular_transpose() {
    // 3x2 general, both storage formats
    let sp = CscMatrix::new(3, 2, vec![0, 2, 3], vec![0, 2, 1], vec![1., -2., 3.]);
    let mut dense: AnyMatrix<f64> = AnyMatrix::SparseGeneral(sp.clone());
    dense.to_dense();

    let y = Matrix::new_from_slice((3, 1), &[2., 1., -1.]);
    for A in [AnyMatrix::SparseGeneral(sp), dense] {
        let mut z = Matrix::zeros((2, 1));
        A.gemv(MatrixShape::T, 1.0, &y, 0.0, &mut z);
        // A' * y = [1*2 + (-2)*(-1), 3*1]
        assert_eq!(z.data, vec![4., 3.]);
    }
}

#[test]
fn test_gemv_beta_accumulates() {
    for A in all_variants() {
        let y = Matrix::new_from_slice((4, 1), &[1., 0., 0., 0.]);
        let mut z = Matrix::new_from_slice((4, 1), &[10., 10., 10., 10.]);
        A.gemv(MatrixShape::N, 1.0, &y, 0.5, &mut z);
        // first column of the matrix plus 5.0
        assert_eq!(z.data, vec![7.0, 4.0, 5.0, 5.5]);
    }
}

#[test]
fn test_mirror_after_shuffled_construction() {
    // same triangle as sym_triu_4x4, columns assembled out of order
    let mut tri = CscMatrix::new(
        4,
        4,
        vec![0, 1, 3, 5, 8],
        vec![0, 1, 0, 2, 1, 3, 0, 2],
        vec![2., 3., -1., 4., 1., 1., 0.5, -2.],
    );
    assert!(tri.check_format().is_err());
    tri.sort_columns();
    assert!(tri.check_format().is_ok());

    let S = SymCscMatrix::new(tri, MatrixTriangle::Triu);
    let R = full_reference();
    for j in 0..4 {
        for k in (j + 1)..4 {
            let want = R[(j, k)];
            match S.mirror(j, k) {
                Some(v) => assert_eq!(v, want),
                None => assert_eq!(want, 0.0),
            }
        }
    }
}

#[test]
fn test_atomic_axpy_under_parallel_updates() {
    use rayon::prelude::*;

    let A: AnyMatrix<f64> = sym_triu_4x4().into();

    //sequential accumulation over every column
    let mut want = vec![0.0; 4];
    for j in 0..4 {
        A.col_axpy(1.0, j, &mut want);
    }

    //concurrent accumulation into one shared destination
    let cells = f64::into_atomic(vec![0.0; 4]);
    (0..4usize).into_par_iter().for_each(|j| {
        A.col_axpy_atomic(1.0, j, &cells);
    });
    let got = f64::from_atomic(&cells);

    for (g, w) in got.iter().zip(&want) {
        assert!((g - w).abs() < 1e-12);
    }
}

#[test]
#[should_panic]
fn test_scale_col_panics_on_symmetric() {
    let mut A: AnyMatrix<f64> = sym_triu_4x4().into();
    A.scale_col(0, 2.0);
}

#[test]
fn test_scale_and_translate_col() {
    let mut A: AnyMatrix<f64> = full_reference().into();
    A.scale_col(1, -2.0);
    assert_eq!(A.col_sum(1), -6.0);

    let mut B: AnyMatrix<f64> = sym_triu_4x4().into();
    B.symmetric_to_general();
    B.translate_col(0, 1.0);
    // column 0 was [2,-1,0,0.5] with 3 stored entries
    assert_eq!(B.col_sum(0), 4.5);
}
