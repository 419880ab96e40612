//! Matrix types flowing through the pipeline.
//!
//! Each stage has its own newtype over [`DMatrix`] so that a factor can't be
//! mistaken for an angle matrix and a correlation matrix can only be built
//! by the pipeline or through validation.

use nalgebra::{DMatrix, DVector, RealField};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::math::tril_indices;

/// Default absolute tolerance for correlation checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[inline]
pub(crate) fn to_f64<F: RealField>(x: F) -> f64 {
    nalgebra::try_convert(x).unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn from_f64<F: RealField>(x: f64) -> F {
    nalgebra::convert(x)
}

/// Angle matrix `Θ` of shape `(m + 1) × m`.
///
/// Angles live strictly below the diagonal; row 0 and everything on or above
/// the diagonal are zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "F: nalgebra::Scalar + Serialize"))]
pub struct AngleMatrix<F> {
    matrix: DMatrix<F>,
}

impl<F: RealField + Copy> AngleMatrix<F> {
    /// Wrap a matrix after checking its shape and that every angle below the
    /// diagonal lies in `(0, π)`.
    ///
    /// Entries on or above the diagonal are never read and are not checked.
    pub fn new(matrix: DMatrix<F>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols + 1 {
            tracing::debug!(rows, cols, "rejected angle matrix shape");
            return Err(Error::Shape { rows, cols });
        }

        let pi = F::pi();
        for (r, c) in tril_indices(cols) {
            let angle = matrix[(r + 1, c)];
            // Negated form so NaN is rejected too.
            if !(angle > F::zero() && angle < pi) {
                tracing::debug!(row = r + 1, col = c, "angle outside (0, π)");
                return Err(Error::AngleOutOfRange {
                    row: r + 1,
                    col: c,
                    value: to_f64(angle),
                });
            }
        }

        Ok(Self { matrix })
    }

    /// Wrap a matrix without checking anything but the shape.
    ///
    /// Angles outside `(0, π)` still yield a correlation matrix, but the
    /// angles are then no longer a unique parameterization of it.
    pub fn from_matrix_unchecked(matrix: DMatrix<F>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols + 1 {
            return Err(Error::Shape { rows, cols });
        }
        Ok(Self { matrix })
    }

    /// Zero-filled angle matrix for `m` columns.
    pub(crate) fn zeros(m: usize) -> Self {
        Self {
            matrix: DMatrix::zeros(m + 1, m),
        }
    }

    pub(crate) fn matrix_mut(&mut self) -> &mut DMatrix<F> {
        &mut self.matrix
    }

    /// Angles in fill order, i.e. the inverse of the embedding.
    pub fn angles(&self) -> Vec<F> {
        tril_indices(self.cols())
            .map(|(r, c)| self.matrix[(r + 1, c)])
            .collect()
    }
}

impl<F> AngleMatrix<F> {
    /// Underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<F> {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    #[inline]
    pub fn into_inner(self) -> DMatrix<F> {
        self.matrix
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of columns, `m`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Square lower-triangular factor `X` whose rows have unit norm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "F: nalgebra::Scalar + Serialize"))]
pub struct FactorMatrix<F> {
    matrix: DMatrix<F>,
}

impl<F> FactorMatrix<F> {
    pub(crate) fn from_matrix(matrix: DMatrix<F>) -> Self {
        Self { matrix }
    }

    /// Underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<F> {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    #[inline]
    pub fn into_inner(self) -> DMatrix<F> {
        self.matrix
    }

    /// Side length.
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }
}

/// Symmetric, unit-diagonal, positive semi-definite matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "F: nalgebra::Scalar + Serialize"))]
pub struct CorrelationMatrix<F> {
    matrix: DMatrix<F>,
}

impl<F: RealField + Copy> CorrelationMatrix<F> {
    /// Wrap a matrix after [`validate`](Self::validate) with [`DEFAULT_TOLERANCE`].
    pub fn new(matrix: DMatrix<F>) -> Result<Self> {
        let candidate = Self { matrix };
        candidate.validate(from_f64(DEFAULT_TOLERANCE))?;
        Ok(candidate)
    }

    pub(crate) fn from_gram(matrix: DMatrix<F>) -> Self {
        Self { matrix }
    }

    /// Check every correlation-matrix property within `tolerance`.
    ///
    /// Checks run in order: shape, symmetry, unit diagonal, range and
    /// finally the spectrum.
    pub fn validate(&self, tolerance: F) -> Result<()> {
        let (rows, cols) = self.matrix.shape();
        if rows != cols || rows == 0 {
            return Err(Error::Shape { rows, cols });
        }

        let one = F::one();
        for i in 0..rows {
            for j in (i + 1)..rows {
                if (self.matrix[(i, j)] - self.matrix[(j, i)]).abs() > tolerance {
                    tracing::debug!(i, j, "correlation matrix is not symmetric");
                    return Err(Error::NotSymmetric { i, j });
                }
            }
        }

        for (index, &value) in self.matrix.diagonal().iter().enumerate() {
            // NaN must fail as well
            if !((value - one).abs() <= tolerance) {
                tracing::debug!(index, "diagonal entry is not one");
                return Err(Error::InvalidDiagonal {
                    index,
                    value: to_f64(value),
                });
            }
        }

        for i in 0..rows {
            for j in 0..cols {
                let value = self.matrix[(i, j)];
                if !(value.abs() <= one + tolerance) {
                    tracing::debug!(i, j, "correlation outside [-1, 1]");
                    return Err(Error::OutOfRange {
                        i,
                        j,
                        value: to_f64(value),
                    });
                }
            }
        }

        let smallest = self.eigenvalues().min();
        if smallest < -tolerance {
            tracing::debug!(eigenvalue = to_f64(smallest), "negative eigenvalue");
            return Err(Error::NotPositiveSemiDefinite {
                eigenvalue: to_f64(smallest),
            });
        }

        Ok(())
    }

    /// Eigenvalues of the matrix, unordered.
    pub fn eigenvalues(&self) -> DVector<F> {
        self.matrix.symmetric_eigenvalues()
    }

    /// Correlation between variables `i` and `j`, if both are in range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<F> {
        self.matrix.get((i, j)).copied()
    }
}

impl<F> CorrelationMatrix<F> {
    /// Underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<F> {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    #[inline]
    pub fn into_inner(self) -> DMatrix<F> {
        self.matrix
    }

    /// Number of variables.
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }
}

impl<F> AsRef<DMatrix<F>> for AngleMatrix<F> {
    fn as_ref(&self) -> &DMatrix<F> {
        &self.matrix
    }
}

impl<F> AsRef<DMatrix<F>> for FactorMatrix<F> {
    fn as_ref(&self) -> &DMatrix<F> {
        &self.matrix
    }
}

impl<F> AsRef<DMatrix<F>> for CorrelationMatrix<F> {
    fn as_ref(&self) -> &DMatrix<F> {
        &self.matrix
    }
}

impl<F: RealField + Copy> TryFrom<DMatrix<F>> for AngleMatrix<F> {
    type Error = Error;

    fn try_from(matrix: DMatrix<F>) -> Result<Self> {
        Self::new(matrix)
    }
}

impl<F: RealField + Copy> TryFrom<DMatrix<F>> for CorrelationMatrix<F> {
    type Error = Error;

    fn try_from(matrix: DMatrix<F>) -> Result<Self> {
        Self::new(matrix)
    }
}
