#![allow(non_snake_case)]

//! MatrixMarket-style text codec for [`AnyMatrix`].
//!
//! The grammar is the `%%MatrixMarket` banner line, any number of `%`
//! comment lines, a size line, then the body: 1-based `row col value`
//! triples for coordinate (sparse) files, whitespace-separated values in
//! column-major order for array (dense) files.  Only real-valued general
//! or symmetric matrices are accepted; integer, complex, pattern, skew
//! and Hermitian files are rejected at the banner.

use crate::algebra::*;
use std::io::{BufRead, Lines, Write};

impl<T> AnyMatrix<T>
where
    T: FloatT,
{
    /// Reads a matrix from MatrixMarket text.
    ///
    /// The storage variant follows the banner: `coordinate` maps to
    /// sparse, `array` to dense, and a `symmetric` qualifier selects
    /// triangle storage with the stored triangle inferred from the data
    /// (`Triu` when no entry lies below the diagonal).  The banner has no
    /// field for the stored triangle, so a diagonal-only symmetric file
    /// always reads back as upper storage regardless of how the writer
    /// held it.  Coordinate entries may arrive in any order; columns are
    /// sorted on the way in.
    pub fn read_matrixmarket<R>(reader: R) -> Result<Self, MatrixMarketError>
    where
        R: BufRead,
    {
        let mut lines = reader.lines();

        let banner = match lines.next() {
            Some(line) => line?,
            None => return Err(MatrixMarketError::BadBanner),
        };
        let (format, symmetric) = parse_banner(&banner)?;

        let size = next_content_line(&mut lines)?.ok_or(MatrixMarketError::BadSize)?;

        match format {
            MatrixFormat::Sparse => read_coordinate(&mut lines, &size, symmetric),
            MatrixFormat::Dense => read_array(&mut lines, &size, symmetric),
        }
    }

    /// Writes the matrix as MatrixMarket text, in scientific notation
    /// with `precision` digits after the point.  Symmetric variants
    /// write their stored triangle only.
    pub fn write_matrixmarket<W>(
        &self,
        writer: &mut W,
        precision: usize,
    ) -> Result<(), MatrixMarketError>
    where
        W: Write,
    {
        let symmetry = if self.is_symmetric() {
            "symmetric"
        } else {
            "general"
        };

        match self {
            AnyMatrix::SparseGeneral(sp) => write_coordinate(writer, sp, symmetry, precision),
            AnyMatrix::SparseSymmetric(sym) => {
                write_coordinate(writer, sym.storage(), symmetry, precision)
            }
            AnyMatrix::DenseGeneral(mat) => write_array(writer, mat, symmetry, precision),
            AnyMatrix::DenseSymmetric(sym) => {
                write_array(writer, sym.storage(), symmetry, precision)
            }
        }
    }
}

fn parse_banner(line: &str) -> Result<(MatrixFormat, bool), MatrixMarketError> {
    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();

    if words.next() != Some("%%matrixmarket") || words.next() != Some("matrix") {
        return Err(MatrixMarketError::BadBanner);
    }

    let format = match words.next() {
        Some("coordinate") => MatrixFormat::Sparse,
        Some("array") => MatrixFormat::Dense,
        _ => return Err(MatrixMarketError::BadBanner),
    };

    let field = words.next().ok_or(MatrixMarketError::BadBanner)?;
    if field != "real" {
        return Err(MatrixMarketError::UnsupportedType(field.into()));
    }

    let symmetric = match words.next() {
        Some("general") => false,
        Some("symmetric") => true,
        Some(other) => return Err(MatrixMarketError::UnsupportedType(other.into())),
        None => return Err(MatrixMarketError::BadBanner),
    };

    Ok((format, symmetric))
}

/// Next non-empty, non-comment line.
fn next_content_line<B: BufRead>(
    lines: &mut Lines<B>,
) -> Result<Option<String>, MatrixMarketError> {
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        return Ok(Some(line));
    }
    Ok(None)
}

fn parse_value<T: FloatT>(tok: &str) -> Result<T, MatrixMarketError> {
    let v: f64 = tok
        .parse()
        .map_err(|_| MatrixMarketError::BadData(format!("could not parse value [{tok}]")))?;
    T::from_f64(v).ok_or_else(|| MatrixMarketError::BadData(format!("unrepresentable value [{v}]")))
}

fn read_coordinate<T, B>(
    lines: &mut Lines<B>,
    size: &str,
    symmetric: bool,
) -> Result<AnyMatrix<T>, MatrixMarketError>
where
    T: FloatT,
    B: BufRead,
{
    let dims: Vec<usize> = size
        .split_whitespace()
        .map(|t| t.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| MatrixMarketError::BadSize)?;
    let &[m, n, nnz] = dims.as_slice() else {
        return Err(MatrixMarketError::BadSize);
    };
    if m == 0 || n == 0 {
        return Err(MatrixMarketError::BadSize);
    }
    if symmetric && m != n {
        return Err(MatrixMarketError::NotSquare);
    }

    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);

    while rows.len() < nnz {
        let line = next_content_line(lines)?
            .ok_or_else(|| MatrixMarketError::BadData("unexpected end of file".into()))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[r, c, v] = fields.as_slice() else {
            return Err(MatrixMarketError::BadData(format!(
                "malformed entry [{}]",
                line.trim()
            )));
        };

        let r: usize = r
            .parse()
            .map_err(|_| MatrixMarketError::BadData(format!("bad row index [{r}]")))?;
        let c: usize = c
            .parse()
            .map_err(|_| MatrixMarketError::BadData(format!("bad column index [{c}]")))?;
        if r == 0 || r > m || c == 0 || c > n {
            return Err(MatrixMarketError::BadData(format!(
                "index ({r}, {c}) out of range"
            )));
        }

        //1-based on disk, 0-based in memory
        rows.push(r - 1);
        cols.push(c - 1);
        vals.push(parse_value(v)?);
    }

    //counting pass over the columns, then cumulative sum
    let mut colptr = vec![0usize; n + 1];
    for &c in &cols {
        colptr[c + 1] += 1;
    }
    for j in 0..n {
        colptr[j + 1] += colptr[j];
    }

    let mut cursor = colptr.clone();
    let mut rowval = vec![0usize; nnz];
    let mut nzval = vec![T::zero(); nnz];
    for ((&r, &c), &v) in rows.iter().zip(&cols).zip(&vals) {
        rowval[cursor[c]] = r;
        nzval[cursor[c]] = v;
        cursor[c] += 1;
    }

    let mut mat = CscMatrix::new(m, n, colptr, rowval, nzval);
    mat.sort_columns();

    //indices and counts were validated above, so the only way the sorted
    //matrix can be malformed is a repeated (row, col) entry
    if mat.check_format().is_err() {
        return Err(MatrixMarketError::BadData(
            "duplicate (row, col) entries".into(),
        ));
    }

    if !symmetric {
        return Ok(mat.into());
    }

    //stored triangle inferred from the first off-diagonal entry
    let uplo = rows
        .iter()
        .zip(&cols)
        .find(|(r, c)| r != c)
        .map(|(r, c)| {
            if r > c {
                MatrixTriangle::Tril
            } else {
                MatrixTriangle::Triu
            }
        })
        .unwrap_or(MatrixTriangle::Triu);

    if !mat.is_triangle(uplo) {
        return Err(MatrixMarketError::BadData(
            "symmetric entries on both sides of the diagonal".into(),
        ));
    }
    Ok(SymCscMatrix::new(mat, uplo).into())
}

fn read_array<T, B>(
    lines: &mut Lines<B>,
    size: &str,
    symmetric: bool,
) -> Result<AnyMatrix<T>, MatrixMarketError>
where
    T: FloatT,
    B: BufRead,
{
    let dims: Vec<usize> = size
        .split_whitespace()
        .map(|t| t.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| MatrixMarketError::BadSize)?;
    let &[m, n] = dims.as_slice() else {
        return Err(MatrixMarketError::BadSize);
    };
    if m == 0 || n == 0 {
        return Err(MatrixMarketError::BadSize);
    }
    if symmetric && m != n {
        return Err(MatrixMarketError::NotSquare);
    }

    let total = m * n;
    let mut data = Vec::with_capacity(total);
    while data.len() < total {
        let line = next_content_line(lines)?
            .ok_or_else(|| MatrixMarketError::BadData("unexpected end of file".into()))?;
        for tok in line.split_whitespace() {
            if data.len() == total {
                return Err(MatrixMarketError::BadData("surplus entries".into()));
            }
            data.push(parse_value(tok)?);
        }
    }
    let mat = Matrix::new_from_slice((m, n), &data);

    if !symmetric {
        return Ok(mat.into());
    }

    //stored triangle inferred from whichever strict triangle is populated
    let lower_nz = (0..n).any(|j| ((j + 1)..m).any(|i| mat[(i, j)] != T::zero()));
    let upper_nz = (0..n).any(|j| (0..j).any(|i| mat[(i, j)] != T::zero()));
    let uplo = match (lower_nz, upper_nz) {
        (true, true) => {
            return Err(MatrixMarketError::BadData(
                "symmetric entries on both sides of the diagonal".into(),
            ));
        }
        (true, false) => MatrixTriangle::Tril,
        _ => MatrixTriangle::Triu,
    };
    Ok(SymMatrix::new(mat, uplo).into())
}

fn write_coordinate<T, W>(
    writer: &mut W,
    sp: &CscMatrix<T>,
    symmetry: &str,
    precision: usize,
) -> Result<(), MatrixMarketError>
where
    T: FloatT,
    W: Write,
{
    writeln!(writer, "%%MatrixMarket matrix coordinate real {symmetry}")?;
    writeln!(writer, "{} {} {}", sp.m, sp.n, sp.nnz())?;
    for j in 0..sp.n {
        for pos in sp.col_range(j) {
            writeln!(
                writer,
                "{} {} {:.prec$e}",
                sp.rowval[pos] + 1,
                j + 1,
                sp.nzval[pos],
                prec = precision
            )?;
        }
    }
    Ok(())
}

fn write_array<T, W>(
    writer: &mut W,
    mat: &Matrix<T>,
    symmetry: &str,
    precision: usize,
) -> Result<(), MatrixMarketError>
where
    T: FloatT,
    W: Write,
{
    writeln!(writer, "%%MatrixMarket matrix array real {symmetry}")?;
    writeln!(writer, "{} {}", mat.m, mat.n)?;
    for v in &mat.data {
        writeln!(writer, "{:.prec$e}", v, prec = precision)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<AnyMatrix<f64>, MatrixMarketError> {
        AnyMatrix::read_matrixmarket(text.as_bytes())
    }

    #[test]
    fn test_read_coordinate_general() {
        let text = "\
%%MatrixMarket matrix coordinate real general
% entries deliberately out of order
3 2 4
3 1 30.0
1 1 10.0
2 2 40.0
2 1 20.0
";
        let A = read(text).unwrap();
        assert!(A.is_sparse() && !A.is_symmetric());
        assert_eq!(A.size(), (3, 2));
        assert_eq!(A.nnz(), 4);
        assert!(A.check_format().is_ok());
        assert_eq!(A.col_sum(0), 60.0);
        assert_eq!(A.col_sum(1), 40.0);
    }

    #[test]
    fn test_read_coordinate_symmetric_infers_triangle() {
        let tril = "\
%%MatrixMarket matrix coordinate real symmetric
2 2 3
1 1 4.0
2 1 1.0
2 2 3.0
";
        let A = read(tril).unwrap();
        assert_eq!(A.triangle(), Some(MatrixTriangle::Tril));
        // full matrix [[4,1],[1,3]]
        assert_eq!(A.col_sum(0), 5.0);
        assert_eq!(A.col_sum(1), 4.0);

        let triu = "\
%%MatrixMarket matrix coordinate real symmetric
2 2 3
1 1 4.0
1 2 1.0
2 2 3.0
";
        assert_eq!(read(triu).unwrap().triangle(), Some(MatrixTriangle::Triu));

        // all-diagonal defaults to upper
        let diag = "\
%%MatrixMarket matrix coordinate real symmetric
2 2 2
1 1 4.0
2 2 3.0
";
        assert_eq!(read(diag).unwrap().triangle(), Some(MatrixTriangle::Triu));
    }

    #[test]
    fn test_read_array() {
        let text = "\
%%MatrixMarket matrix array real general
2 2
1.0
2.0
3.0
4.0
";
        let A = read(text).unwrap();
        assert!(A.is_dense());
        match &A {
            AnyMatrix::DenseGeneral(mat) => {
                assert_eq!(mat.data, vec![1., 2., 3., 4.]);
            }
            _ => panic!("expected dense general"),
        }
    }

    #[test]
    fn test_diagonal_symmetric_reads_back_as_upper() {
        // banner carries no triangle field, so lower storage with nothing
        // below the diagonal comes back as upper
        let mat = Matrix::from(&[[2.0, 0.0], [0.0, 5.0]]);
        let A: AnyMatrix<f64> = SymMatrix::new(mat, MatrixTriangle::Tril).into();

        let mut buf = Vec::new();
        A.write_matrixmarket(&mut buf, 6).unwrap();
        let B = AnyMatrix::<f64>::read_matrixmarket(buf.as_slice()).unwrap();

        assert_eq!(B.triangle(), Some(MatrixTriangle::Triu));
        assert_eq!(B.size(), (2, 2));
        assert_eq!(B.col_sum(0), 2.0);
        assert_eq!(B.col_sum(1), 5.0);
    }

    #[test]
    fn test_banner_rejections() {
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate integer general\n1 1 0\n"),
            Err(MatrixMarketError::UnsupportedType(_))
        ));
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real skew-symmetric\n1 1 0\n"),
            Err(MatrixMarketError::UnsupportedType(_))
        ));
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate complex hermitian\n1 1 0\n"),
            Err(MatrixMarketError::UnsupportedType(_))
        ));
        assert!(matches!(
            read("not a matrix market file\n"),
            Err(MatrixMarketError::BadBanner)
        ));
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real symmetric\n2 3 0\n"),
            Err(MatrixMarketError::NotSquare)
        ));
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real general\n2 2\n"),
            Err(MatrixMarketError::BadSize)
        ));
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real general\n2 2 2\n1 1 1.0\n"),
            Err(MatrixMarketError::BadData(_))
        ));
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real general\n2 2 1\n3 1 1.0\n"),
            Err(MatrixMarketError::BadData(_))
        ));
        // mirrored duplicates are not a valid triangle
        assert!(matches!(
            read("%%MatrixMarket matrix coordinate real symmetric\n2 2 2\n1 2 1.0\n2 1 1.0\n"),
            Err(MatrixMarketError::BadData(_))
        ));
    }

    #[test]
    fn test_read_rejects_duplicate_entries() {
        let text = "\
%%MatrixMarket matrix coordinate real general
2 2 2
1 1 1.0
1 1 2.0
";
        assert!(matches!(read(text), Err(MatrixMarketError::BadData(_))));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let tri = CscMatrix::new(
            3,
            3,
            vec![0, 1, 3, 5],
            vec![0, 0, 1, 1, 2],
            vec![4., 1.25, 3., 2., 5.],
        );
        let sym: AnyMatrix<f64> = SymCscMatrix::new(tri, MatrixTriangle::Triu).into();

        let mut general = sym.clone();
        general.symmetric_to_general();
        let mut dense_sym = sym.clone();
        dense_sym.to_dense();
        let mut dense_general = general.clone();
        dense_general.to_dense();

        for orig in [sym, general, dense_sym, dense_general] {
            let mut buf = Vec::new();
            orig.write_matrixmarket(&mut buf, 17).unwrap();
            let back = AnyMatrix::read_matrixmarket(buf.as_slice()).unwrap();
            assert_eq!(back, orig);
        }
    }
}
