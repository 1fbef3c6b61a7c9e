#![allow(non_snake_case)]

use anymat::algebra::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn sym_triu_3x3() -> AnyMatrix<f64> {
    // full matrix:
    //[4.0   1.25   ⋅ ]
    //[1.25  3.0   2.0]
    //[ ⋅    2.0   5.0]
    let tri = CscMatrix::new(
        3,
        3,
        vec![0, 1, 3, 5],
        vec![0, 0, 1, 1, 2],
        vec![4., 1.25, 3., 2., 5.],
    );
    SymCscMatrix::new(tri, MatrixTriangle::Triu).into()
}

#[test]
fn test_file_round_trip_all_variants() {
    let sym = sym_triu_3x3();
    let mut general = sym.clone();
    general.symmetric_to_general();
    let mut dense_sym = sym.clone();
    dense_sym.to_dense();
    let mut dense_general = general.clone();
    dense_general.to_dense();

    let dir = tempfile::tempdir().unwrap();
    for (name, orig) in [
        ("sym.mtx", sym),
        ("general.mtx", general),
        ("dense_sym.mtx", dense_sym),
        ("dense_general.mtx", dense_general),
    ] {
        let path = dir.path().join(name);

        let mut writer = BufWriter::new(File::create(&path).unwrap());
        orig.write_matrixmarket(&mut writer, 17).unwrap();
        drop(writer);

        let reader = BufReader::new(File::open(&path).unwrap());
        let back = AnyMatrix::read_matrixmarket(reader).unwrap();

        assert_eq!(back, orig, "{name}");
        assert!(back.check_format().is_ok());
    }
}

#[test]
fn test_read_then_multiply() {
    // a small end-to-end pass: parse, convert, multiply, compare
    let text = "\
%%MatrixMarket matrix coordinate real symmetric
% lower triangle of [[2,-1],[-1,2]]
2 2 3
1 1 2.0
2 1 -1.0
2 2 2.0
";
    let mut A = AnyMatrix::<f64>::read_matrixmarket(text.as_bytes()).unwrap();
    assert_eq!(A.triangle(), Some(MatrixTriangle::Tril));

    let y = Matrix::new_from_slice((2, 1), &[1., 2.]);
    let mut z = Matrix::zeros((2, 1));
    A.gemv(MatrixShape::N, 1.0, &y, 0.0, &mut z);
    assert_eq!(z.data, vec![0., 3.]);

    //materializing the mirror must not change the product
    A.symmetric_to_general();
    let mut z2 = Matrix::zeros((2, 1));
    A.gemv(MatrixShape::N, 1.0, &y, 0.0, &mut z2);
    assert_eq!(z2.data, z.data);
}
