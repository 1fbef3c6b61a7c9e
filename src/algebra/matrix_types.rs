/// Matrix orientation marker, selecting `op(X)` in matrix-vector products
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

/// Storage format marker used by constructors and the text codec
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixFormat {
    /// Column-compressed sparse storage
    Sparse,
    /// Dense column-major storage
    Dense,
}

/// Symmetry marker used by constructors and the text codec
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixSymmetry {
    /// No symmetry is assumed; all entries are stored
    General,
    /// Symmetric, storing the upper triangle only
    SymmetricUpper,
    /// Symmetric, storing the lower triangle only
    SymmetricLower,
}

impl MatrixSymmetry {
    pub(crate) fn triangle(&self) -> Option<MatrixTriangle> {
        match self {
            MatrixSymmetry::General => None,
            MatrixSymmetry::SymmetricUpper => Some(MatrixTriangle::Triu),
            MatrixSymmetry::SymmetricLower => Some(MatrixTriangle::Tril),
        }
    }
}

impl MatrixShape {
    #[allow(dead_code)] //used only by the blas feature
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixShape::N => b'N',
            MatrixShape::T => b'T',
        }
    }
}

impl MatrixTriangle {
    #[allow(dead_code)] //used only by the blas feature
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
}
