use nalgebra::{DMatrix, RealField};

use super::Transform;

/// Logistic squash of the real line onto `(0, π)`: `π / (1 + e^{-x})`.
///
/// Total on finite input. Very large magnitudes saturate to exactly `0` or
/// `π` in floating point without producing NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squash;

impl Squash {
    /// Squash a single value.
    #[inline]
    pub fn angle<F: RealField + Copy>(x: F) -> F {
        F::one() / (F::one() + (-x).exp()) * F::pi()
    }
}

impl<D, F> Transform<D, Vec<F>> for Squash
where
    D: AsRef<[F]>,
    F: RealField + Copy,
{
    fn apply(&self, input: &D) -> Vec<F> {
        input.as_ref().iter().map(|&x| Self::angle(x)).collect()
    }
}

impl<F: RealField + Copy> Transform<DMatrix<F>, DMatrix<F>> for Squash {
    fn apply(&self, input: &DMatrix<F>) -> DMatrix<F> {
        input.map(Self::angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn zero_maps_to_half_pi() {
        assert_abs_diff_eq!(Squash::angle(0.0_f64), FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(Squash::angle(0.0_f32), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn stays_strictly_inside_open_interval() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let raw: Vec<f64> = (0..10_000).map(|_| rng.gen_range(-30.0..30.0)).collect();
        let angles: Vec<f64> = Squash.apply(&raw);
        assert!(angles.iter().all(|&a| a > 0.0 && a < PI));
    }

    #[test]
    fn strictly_increasing() {
        let raw: Vec<f64> = (-300..=300).map(|i| f64::from(i) * 0.1).collect();
        let angles: Vec<f64> = Squash.apply(&raw);
        for pair in angles.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn odd_symmetry_about_half_pi() {
        for x in [0.3_f64, 1.0, 2.5, 7.0] {
            assert_abs_diff_eq!(Squash::angle(x) + Squash::angle(-x), PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn extreme_inputs_saturate_without_nan() {
        let angles: Vec<f64> = Squash.apply(&[-1e6, -800.0, 800.0, 1e6]);
        assert!(angles.iter().all(|a| !a.is_nan()));
        assert_abs_diff_eq!(angles[0], 0.0, epsilon = 1e-300);
        assert_abs_diff_eq!(angles[3], PI, epsilon = 1e-15);
    }

    #[test]
    fn matrix_input_is_elementwise() {
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, -1.0, 2.0]);
        let squashed: DMatrix<f64> = Squash.apply(&m);
        assert_eq!(squashed.shape(), (2, 2));
        for (got, &x) in squashed.iter().zip(m.iter()) {
            assert_abs_diff_eq!(*got, Squash::angle(x), epsilon = 1e-15);
        }
    }
}
