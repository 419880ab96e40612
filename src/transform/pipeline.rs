use nalgebra::RealField;

use super::{AngleEmbed, FactorBuild, GramReduce, Squash, Transform};
use crate::error::{Error, Result};
use crate::math::correlation_len;
use crate::matrix::{AngleMatrix, CorrelationMatrix, FactorMatrix};

/// Angle matrix to correlation matrix: [`FactorBuild`] followed by [`GramReduce`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleToCorrelation;

impl<F: RealField + Copy> Transform<AngleMatrix<F>, CorrelationMatrix<F>> for AngleToCorrelation {
    fn apply(&self, theta: &AngleMatrix<F>) -> CorrelationMatrix<F> {
        let factor: FactorMatrix<F> = FactorBuild.apply(theta);
        GramReduce.apply(&factor)
    }
}

/// Unconstrained vector of length `n(n-1)/2` to an `n × n` correlation matrix.
///
/// Runs [`Squash`], [`AngleEmbed`] with `n - 1` columns, then
/// [`AngleToCorrelation`]. Every finite input yields a valid correlation
/// matrix; only the length is checked.
#[derive(Debug, Clone, Copy)]
pub struct VecToCorrelation {
    /// Side length of the resulting correlation matrix.
    pub n: usize,
}

impl VecToCorrelation {
    /// Pipeline producing `n × n` matrices.
    pub fn new(n: usize) -> Self {
        VecToCorrelation { n }
    }

    /// Length of the raw vector this pipeline accepts, `None` if it
    /// exceeds `usize::MAX`.
    pub fn input_len(&self) -> Option<usize> {
        correlation_len(self.n)
    }
}

impl<D, F> Transform<D, Result<CorrelationMatrix<F>>> for VecToCorrelation
where
    D: AsRef<[F]>,
    F: RealField + Copy,
{
    fn apply(&self, input: &D) -> Result<CorrelationMatrix<F>> {
        let raw = input.as_ref();
        if self.n == 0 {
            tracing::debug!("zero-dimensional correlation matrix requested");
            return Err(Error::ZeroDimension);
        }

        let expected = self.input_len();
        if expected != Some(raw.len()) {
            let expected = expected.unwrap_or(usize::MAX);
            tracing::debug!(
                n = self.n,
                expected,
                actual = raw.len(),
                "raw vector has wrong length"
            );
            return Err(Error::Dimension {
                expected,
                actual: raw.len(),
                n: self.n,
            });
        }

        let angles: Vec<F> = Squash.apply(&raw);
        let theta: Result<AngleMatrix<F>> = AngleEmbed::new(self.n - 1).apply(&angles);
        let theta = theta?;
        tracing::trace!(rows = theta.rows(), cols = theta.cols(), "embedded angles");

        Ok(AngleToCorrelation.apply(&theta))
    }
}

/// Shorthand for `VecToCorrelation::new(n).apply(&raw)`.
///
/// # Errors
/// [`Error::ZeroDimension`] for `n == 0`, [`Error::Dimension`] when
/// `raw.len() != n(n-1)/2`.
pub fn vec_to_correlation<F: RealField + Copy>(
    raw: &[F],
    n: usize,
) -> Result<CorrelationMatrix<F>> {
    VecToCorrelation::new(n).apply(&raw)
}
