use nalgebra::{DMatrix, RealField};

use super::Transform;
use crate::matrix::{AngleMatrix, FactorMatrix};

/// Builds the lower-triangular factor `X` from an angle matrix `Θ`.
///
/// With `S = sin Θ` and `C = cos Θ`, row `i` of `X` is
/// ```text
/// X[i, j] = C[i, j] · S[i, 0] ⋯ S[i, j-1]     for j < i
/// X[i, i] =           S[i, 0] ⋯ S[i, i-1]
/// ```
/// and `X[0, 0] = 1`. Telescoping `sin² + cos² = 1` gives every row unit
/// norm for any real angles.
///
/// Products are accumulated left to right rather than as `exp Σ ln S`, which
/// agrees to rounding and stays finite when a sine is zero or negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorBuild;

impl<F: RealField + Copy> Transform<AngleMatrix<F>, FactorMatrix<F>> for FactorBuild {
    fn apply(&self, theta: &AngleMatrix<F>) -> FactorMatrix<F> {
        let angles = theta.matrix();
        let dim = theta.cols() + 1;

        let mut x = DMatrix::zeros(dim, dim);
        x[(0, 0)] = F::one();

        for i in 1..dim {
            let mut sines = F::one();
            for j in 0..i {
                let (s, c) = angles[(i, j)].sin_cos();
                x[(i, j)] = c * sines;
                sines = sines * s;
            }
            x[(i, i)] = sines;
        }

        FactorMatrix::from_matrix(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::math::triangular;
    use crate::transform::AngleEmbed;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::f64::consts::PI;

    fn random_theta(rng: &mut impl Rng, n: usize) -> AngleMatrix<f64> {
        let angles: Vec<f64> = (0..triangular(n).unwrap())
            .map(|_| rng.gen_range(1e-3..PI - 1e-3))
            .collect();
        let theta: Result<AngleMatrix<f64>> = AngleEmbed::new(n).apply(&angles);
        theta.unwrap()
    }

    /// Reference construction through `exp(Σ ln sin)`.
    fn log_sum_exp_factor(theta: &AngleMatrix<f64>) -> DMatrix<f64> {
        let t = theta.matrix();
        let dim = t.nrows();
        let mut x = DMatrix::zeros(dim, dim);
        for i in 0..dim {
            for j in 0..=i {
                let log_sines: f64 = (0..j).map(|k| t[(i, k)].sin().ln()).sum();
                x[(i, j)] = match (i == j, j == 0) {
                    (true, true) => 1.0,
                    (true, false) => log_sines.exp(),
                    (false, _) => t[(i, j)].cos() * log_sines.exp(),
                };
            }
        }
        x
    }

    #[test]
    fn two_by_two_closed_form() {
        let theta = AngleMatrix::new(DMatrix::from_row_slice(2, 1, &[0.0, 1.2])).unwrap();
        let x: FactorMatrix<f64> = FactorBuild.apply(&theta);
        let m = x.matrix();
        assert_abs_diff_eq!(m[(0, 0)], 1.0, epsilon = 0.0);
        assert_abs_diff_eq!(m[(0, 1)], 0.0, epsilon = 0.0);
        assert_abs_diff_eq!(m[(1, 0)], 1.2_f64.cos(), epsilon = 1e-15);
        assert_abs_diff_eq!(m[(1, 1)], 1.2_f64.sin(), epsilon = 1e-15);
    }

    #[test]
    fn lower_triangular_with_unit_rows() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for n in 0..10 {
            let x: FactorMatrix<f64> = FactorBuild.apply(&random_theta(&mut rng, n));
            let m = x.matrix();
            assert_eq!(x.dim(), n + 1);
            for i in 0..m.nrows() {
                assert_abs_diff_eq!(m.row(i).norm(), 1.0, epsilon = 1e-12);
                for j in (i + 1)..m.ncols() {
                    assert!(m[(i, j)] == 0.0);
                }
            }
        }
    }

    #[test]
    fn matches_log_sum_exp_formula() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12);
        for n in 1..9 {
            let theta = random_theta(&mut rng, n);
            let x: FactorMatrix<f64> = FactorBuild.apply(&theta);
            let reference = log_sum_exp_factor(&theta);
            for (got, want) in x.matrix().iter().zip(reference.iter()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn first_column_is_cosine() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(13);
        let theta = random_theta(&mut rng, 5);
        let x: FactorMatrix<f64> = FactorBuild.apply(&theta);
        for i in 1..6 {
            assert_abs_diff_eq!(x.matrix()[(i, 0)], theta.matrix()[(i, 0)].cos(), epsilon = 1e-15);
        }
    }

    #[test]
    fn angles_outside_open_interval_stay_finite() {
        // exp(Σ ln sin) would be NaN here
        #[rustfmt::skip]
        let raw = DMatrix::from_row_slice(3, 2, &[
            0.0, 0.0,
            PI,  0.0,
            -1.0, 4.0,
        ]);
        let theta = AngleMatrix::from_matrix_unchecked(raw).unwrap();
        let x: FactorMatrix<f64> = FactorBuild.apply(&theta);
        assert!(x.matrix().iter().all(|v| v.is_finite()));
        for i in 0..3 {
            assert_abs_diff_eq!(x.matrix().row(i).norm(), 1.0, epsilon = 1e-12);
        }
    }
}
