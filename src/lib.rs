//! Unconstrained real vectors to valid correlation matrices.
//!
//! A vector of `n(n-1)/2` reals is squashed into angles in `(0, π)`, the
//! angles fill the lower triangle of an angle matrix, and sine/cosine
//! products of those angles give a lower-triangular factor `X` with unit
//! rows. The correlation matrix is the Gram product `R = XXᵀ`, so it is
//! symmetric, has unit diagonal and is positive semi-definite by
//! construction.
//!
//! ```
//! use hypercorr::vec_to_correlation;
//!
//! let r = vec_to_correlation(&[0.3_f64, -1.0, 2.2, 0.0, 0.5, -0.7], 4).unwrap();
//! assert_eq!(r.dim(), 4);
//! assert!(r.validate(1e-9).is_ok());
//! ```

mod batch;
mod display;
mod error;
mod math;
mod matrix;
mod transform;

pub use batch::vec_to_correlation_batch;
pub use error::{Error, Result};
pub use math::{TrilIndices, correlation_len, triangular, tril_indices};
pub use matrix::{AngleMatrix, CorrelationMatrix, DEFAULT_TOLERANCE, FactorMatrix};
pub use nalgebra;
pub use transform::*;
