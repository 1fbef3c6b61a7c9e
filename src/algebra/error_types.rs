use thiserror::Error;

/// Error type returned by matrix concatenation operations.
#[derive(Error, Debug)]
pub enum MatrixConcatenationError {
    #[error("Incompatible dimensions")]
    /// Indicates inputs have incompatible dimension
    IncompatibleDimension,
    #[error("Operands must share the same storage format")]
    /// Indicates one sparse and one dense operand
    FormatMismatch,
    #[error("Operands must be general matrices")]
    /// Indicates a symmetric operand
    NotGeneral,
}

#[derive(Error, Debug)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}

/// Error type returned by matrix constructors.
#[derive(Error, Debug)]
pub enum MatrixBuildError {
    #[error("symmetric matrix must be square")]
    /// A symmetric matrix was requested with `rows != cols`
    NotSquare,
    #[error("matrix dimension must be nonzero")]
    /// A sized constructor (e.g. identity) was given a zero dimension
    ZeroDimension,
}

/// Error type returned by the MatrixMarket text codec.
#[derive(Error, Debug)]
pub enum MatrixMarketError {
    #[error(transparent)]
    /// Underlying stream failure
    Io(#[from] std::io::Error),
    #[error("invalid MatrixMarket banner")]
    /// First line is not a well-formed `%%MatrixMarket` banner
    BadBanner,
    #[error("matrix type is not supported: [{0}]")]
    /// Banner declares an element kind or symmetry the crate does not store
    UnsupportedType(String),
    #[error("invalid or missing size line")]
    /// Size line absent or not `rows cols [nnz]`
    BadSize,
    #[error("invalid matrix data: {0}")]
    /// Body entry failed to parse or was out of range
    BadData(String),
    #[error("symmetric matrix must be square")]
    /// Banner declares symmetric but the size line is rectangular
    NotSquare,
}
