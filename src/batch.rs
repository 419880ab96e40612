//! Running the pipeline over many raw vectors at once.

use nalgebra::RealField;

use crate::error::Result;
use crate::matrix::CorrelationMatrix;
use crate::transform::{Transform, VecToCorrelation};

/// Apply [`VecToCorrelation`] with side length `n` to every raw vector.
///
/// Results come back in input order, one per vector, so a bad length only
/// fails its own entry. With the `rayon` feature the vectors are processed
/// in parallel.
pub fn vec_to_correlation_batch<D, F>(raws: &[D], n: usize) -> Vec<Result<CorrelationMatrix<F>>>
where
    D: AsRef<[F]> + Sync,
    F: RealField + Copy,
{
    let pipeline = VecToCorrelation::new(n);
    tracing::trace!(n, count = raws.len(), "batch pipeline");

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        raws.par_iter()
            .map(|raw| -> Result<CorrelationMatrix<F>> { pipeline.apply(raw) })
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        raws.iter()
            .map(|raw| -> Result<CorrelationMatrix<F>> { pipeline.apply(raw) })
            .collect()
    }
}
