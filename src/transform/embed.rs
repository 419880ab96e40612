use nalgebra::RealField;

use super::Transform;
use crate::error::{Error, Result};
use crate::math::{triangular, tril_indices};
use crate::matrix::AngleMatrix;

/// Places `n(n+1)/2` angles strictly below the diagonal of an `(n+1) × n` matrix.
///
/// The `k`-th angle goes to `(r + 1, c)` where `(r, c)` is the `k`-th pair of
/// [`tril_indices(n)`](crate::math::tril_indices). Row 0 stays zero.
///
/// Angles are placed as given; use [`AngleMatrix::new`] to validate a matrix
/// that did not come from [`Squash`](super::Squash).
#[derive(Debug, Clone, Copy)]
pub struct AngleEmbed {
    /// Number of columns of the resulting angle matrix.
    pub n: usize,
}

impl AngleEmbed {
    /// Embedding into an `(n+1) × n` matrix.
    pub fn new(n: usize) -> Self {
        AngleEmbed { n }
    }
}

impl<D, F> Transform<D, Result<AngleMatrix<F>>> for AngleEmbed
where
    D: AsRef<[F]>,
    F: RealField + Copy,
{
    fn apply(&self, input: &D) -> Result<AngleMatrix<F>> {
        let angles = input.as_ref();
        let expected = triangular(self.n);
        if expected != Some(angles.len()) {
            let expected = expected.unwrap_or(usize::MAX);
            tracing::debug!(
                n = self.n,
                expected,
                actual = angles.len(),
                "angle vector has wrong length"
            );
            return Err(Error::Dimension {
                expected,
                actual: angles.len(),
                n: self.n,
            });
        }

        let mut theta = AngleMatrix::zeros(self.n);
        let matrix = theta.matrix_mut();
        for ((r, c), &angle) in tril_indices(self.n).zip(angles) {
            matrix[(r + 1, c)] = angle;
        }

        Ok(theta)
    }
}
