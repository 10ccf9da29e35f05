//! Raw determinant.

use toeplitz_levinson::{LevinsonConfig, ToeplitzScalar};

use crate::error::ToeplitzError;
use crate::input::{ToeplitzInput, prepare};
use crate::reflect::reflect;

/// Computes `det(T)` of a Toeplitz matrix directly, with the default
/// [`LevinsonConfig`].
///
/// Evaluates `c[0]^n · Π_k (1 - kf[k]·kb[k])^(n-k)` without logarithms.
/// This is exact in exact arithmetic but the intermediate powers overflow or
/// underflow for large `n` or extreme `c[0]`; the result then follows IEEE
/// semantics (`inf`, `0`, or NaN). Prefer
/// [`slogdet_toeplitz`](crate::slogdet_toeplitz) for large matrices.
///
/// For `n = 1` the result is `c[0]` exactly.
///
/// # Errors
///
/// Returns [`ToeplitzError`] when the input is empty, the lengths differ, an
/// entry is non-finite, or `c[0] != r[0]`.
///
/// # Example
///
/// ```
/// use toeplitz_det::det_toeplitz;
///
/// let c = [2.0_f64, 0.5, 0.1];
/// let r = [2.0, 0.3, 0.2];
/// let det = det_toeplitz((&c, &r)).unwrap();
/// assert!((det - 7.419).abs() < 1e-12);
/// ```
pub fn det_toeplitz<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
) -> Result<T, ToeplitzError> {
    det_toeplitz_with_config(input, &LevinsonConfig::default())
}

/// [`det_toeplitz`] with an explicit recursion configuration.
///
/// # Errors
///
/// As [`det_toeplitz`], plus [`ToeplitzError::Recursion`] when `config`
/// fails validation.
#[tracing::instrument(skip_all)]
pub fn det_toeplitz_with_config<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
    config: &LevinsonConfig,
) -> Result<T, ToeplitzError> {
    config.validate()?;
    let prepared = prepare(input.into())?;
    let n = prepared.dim();
    let c0 = prepared.corner();
    if n == 1 {
        return Ok(c0);
    }

    let coeffs = reflect(&prepared, config)?;
    let det = coeffs
        .products()
        .into_iter()
        .zip(coeffs.powers())
        .fold(c0.powu(n), |acc, (p, power)| {
            acc * (T::one() - p).powu(power)
        });
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn scalar_matrix_is_exact() {
        assert_eq!(det_toeplitz(&[0.1_f64]).unwrap(), 0.1);
    }

    #[test]
    fn two_by_two() {
        // [[3, 2], [1, 3]]
        let det = det_toeplitz((&[3.0_f64, 1.0], &[3.0, 2.0])).unwrap();
        assert_abs_diff_eq!(det, 7.0, epsilon = 1e-14);
    }

    #[test]
    fn leading_minor_breakdown_reports_zero() {
        // det([[1, 1, 0.5], [1, 1, 1], [0.5, 1, 1]]) = -0.25, but the leading
        // 2×2 minor vanishes and the recursion stops there.
        assert_eq!(det_toeplitz(&[1.0_f64, 1.0, 0.5]).unwrap(), 0.0);
    }

    #[test]
    fn overflow_is_not_trapped() {
        assert_eq!(det_toeplitz(&[1e300_f64, 0.0]).unwrap(), f64::INFINITY);
    }
}
