use nalgebra::{DMatrix, RealField};

use super::Transform;
use crate::matrix::{CorrelationMatrix, FactorMatrix};

/// Gram product `R = X Xᵀ` of a factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct GramReduce;

impl<F: RealField + Copy> Transform<FactorMatrix<F>, CorrelationMatrix<F>> for GramReduce {
    fn apply(&self, factor: &FactorMatrix<F>) -> CorrelationMatrix<F> {
        let x = factor.matrix();
        let n = x.nrows();
        // R[i, j] and R[j, i] are the same products summed in the same order,
        // so the result is exactly symmetric.
        let gram = DMatrix::from_fn(n, n, |i, j| x.row(i).dot(&x.row(j)));
        CorrelationMatrix::from_gram(gram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::AngleMatrix;
    use crate::transform::FactorBuild;
    use approx::assert_abs_diff_eq;

    fn factor_of(theta: DMatrix<f64>) -> FactorMatrix<f64> {
        FactorBuild.apply(&AngleMatrix::new(theta).unwrap())
    }

    #[test]
    fn equals_product_with_transpose() {
        #[rustfmt::skip]
        let x = factor_of(DMatrix::from_row_slice(4, 3, &[
            0.0, 0.0, 0.0,
            0.4, 0.0, 0.0,
            1.1, 2.9, 0.0,
            0.7, 1.5, 2.2,
        ]));
        let r: CorrelationMatrix<f64> = GramReduce.apply(&x);
        let expected = x.matrix() * x.matrix().transpose();
        for (got, want) in r.matrix().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-14);
        }
    }

    #[test]
    fn exactly_symmetric() {
        #[rustfmt::skip]
        let x = factor_of(DMatrix::from_row_slice(4, 3, &[
            0.0, 0.0, 0.0,
            0.1, 0.0, 0.0,
            3.0, 0.2, 0.0,
            1.3, 2.7, 0.9,
        ]));
        let r: CorrelationMatrix<f64> = GramReduce.apply(&x);
        let m = r.matrix();
        for i in 0..4 {
            for j in 0..4 {
                assert!(m[(i, j)].to_bits() == m[(j, i)].to_bits(), "({}, {})", i, j);
            }
        }
    }

    #[test]
    fn two_by_two_correlation_is_cosine() {
        let x = factor_of(DMatrix::from_row_slice(2, 1, &[0.0, 0.8]));
        let r: CorrelationMatrix<f64> = GramReduce.apply(&x);
        assert_abs_diff_eq!(r.matrix()[(0, 1)], 0.8_f64.cos(), epsilon = 1e-15);
        assert_abs_diff_eq!(r.matrix()[(1, 1)], 1.0, epsilon = 1e-15);
    }
}
