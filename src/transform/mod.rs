//! The four steps from a raw vector to a correlation matrix, and their chains.
//!
//! ```text
//! raw ──Squash──▶ angles ──AngleEmbed──▶ Θ ──FactorBuild──▶ X ──GramReduce──▶ R = XXᵀ
//! ```
//! [`AngleToCorrelation`] runs the last two steps, [`VecToCorrelation`] runs all four.

/// A pure map from `D` to `T`.
///
/// Implementors are small configuration structs, so the same value can be
/// reused for any number of inputs. The output type is a trait parameter,
/// so one transform can serve several input shapes.
pub trait Transform<D, T> {
    /// Apply the transform to `input`.
    fn apply(&self, input: &D) -> T;
}

mod embed;
mod factor;
mod gram;
mod pipeline;
mod squash;

pub use embed::AngleEmbed;
pub use factor::FactorBuild;
pub use gram::GramReduce;
pub use pipeline::{AngleToCorrelation, VecToCorrelation, vec_to_correlation};
pub use squash::Squash;
