use std::error::Error as StdError;
use std::fmt;

/// Errors raised when an input cannot be turned into (or is not) a correlation matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input length does not match the triangular size required for `n`.
    Dimension {
        /// Required number of elements, `usize::MAX` when that count overflows.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
        /// Target size the length was checked against.
        n: usize,
    },
    /// A correlation matrix of dimension zero was requested.
    ZeroDimension,
    /// Matrix has the wrong shape for the requested role.
    Shape {
        /// Rows of the supplied matrix.
        rows: usize,
        /// Columns of the supplied matrix.
        cols: usize,
    },
    /// An angle below the diagonal lies outside `(0, π)`.
    AngleOutOfRange {
        /// Row of the offending angle.
        row: usize,
        /// Column of the offending angle.
        col: usize,
        /// The angle itself.
        value: f64,
    },
    /// `R[i, j]` and `R[j, i]` differ by more than the tolerance.
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
    /// Diagonal entry is not one.
    InvalidDiagonal {
        /// Diagonal position.
        index: usize,
        /// Entry found there.
        value: f64,
    },
    /// Entry lies outside `[-1, 1]`.
    OutOfRange {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Offending entry.
        value: f64,
    },
    /// Matrix has a negative eigenvalue beyond the tolerance.
    NotPositiveSemiDefinite {
        /// Smallest eigenvalue.
        eigenvalue: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Dimension { expected, actual, n } => write!(
                f,
                "Dimension size is wrong: expected {} elements for n = {}, got {}",
                expected, n, actual
            ),
            Error::ZeroDimension => write!(f, "Correlation matrix dimension must be at least 1"),
            Error::Shape { rows, cols } => {
                write!(f, "Matrix shape {}x{} is not valid here", rows, cols)
            }
            Error::AngleOutOfRange { row, col, value } => write!(
                f,
                "Angle at ({}, {}) is {}, expected a value in (0, π)",
                row, col, value
            ),
            Error::NotSymmetric { i, j } => {
                write!(f, "Matrix is not symmetric at ({}, {})", i, j)
            }
            Error::InvalidDiagonal { index, value } => write!(
                f,
                "Diagonal element at index {} is {}, expected 1",
                index, value
            ),
            Error::OutOfRange { i, j, value } => write!(
                f,
                "Correlation at ({}, {}) is {}, outside [-1, 1]",
                i, j, value
            ),
            Error::NotPositiveSemiDefinite { eigenvalue } => write!(
                f,
                "Matrix is not positive semi-definite: smallest eigenvalue is {}",
                eigenvalue
            ),
        }
    }
}

impl StdError for Error {}
