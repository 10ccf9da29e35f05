//! Plain log-determinant for matrices with a positive determinant.

use toeplitz_levinson::{LevinsonConfig, ToeplitzScalar};

use crate::error::ToeplitzError;
use crate::input::{ToeplitzInput, prepare};
use crate::reflect::reflect;

/// Computes `ln(det(T))` of a Toeplitz matrix whose determinant is real and
/// strictly positive, with the default [`LevinsonConfig`].
///
/// Cheaper than [`slogdet_toeplitz`](crate::slogdet_toeplitz): there is no
/// per-order case split and no sign tracking.
///
/// # Precondition
///
/// **The caller must guarantee that the determinant is real and positive.**
/// This is not checked. When it does not hold the result is NaN (real input)
/// or has a non-zero imaginary part (complex input); it is never an error.
/// For real input the logarithms are taken term by term, so a negative
/// `c[0]` or a negative factor `1 - kf[k]·kb[k]` also yields NaN, even when
/// the determinant itself is positive. Positive-definite input never hits
/// this. If the sign is not known in advance, use
/// [`slogdet_toeplitz`](crate::slogdet_toeplitz) instead.
///
/// # Errors
///
/// Returns [`ToeplitzError`] when the input is empty, the lengths differ, an
/// entry is non-finite, or `c[0] != r[0]`.
///
/// # Example
///
/// ```
/// use toeplitz_det::log_det_toeplitz;
///
/// let log_det = log_det_toeplitz(&[2.0_f64, 0.5, 0.1]).unwrap();
/// assert!((log_det - 7.03_f64.ln()).abs() < 1e-12);
///
/// // Negative determinant: the precondition is violated.
/// assert!(log_det_toeplitz(&[-2.0_f64, 0.5, 0.1]).unwrap().is_nan());
/// ```
pub fn log_det_toeplitz<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
) -> Result<T, ToeplitzError> {
    log_det_toeplitz_with_config(input, &LevinsonConfig::default())
}

/// [`log_det_toeplitz`] with an explicit recursion configuration.
///
/// # Errors
///
/// As [`log_det_toeplitz`], plus [`ToeplitzError::Recursion`] when `config`
/// fails validation.
#[tracing::instrument(skip_all)]
pub fn log_det_toeplitz_with_config<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
    config: &LevinsonConfig,
) -> Result<T, ToeplitzError> {
    config.validate()?;
    let prepared = prepare(input.into())?;
    let n = prepared.dim();

    let mut log_det = T::from_real(n as f64) * prepared.corner().ln();
    if n > 1 {
        // Hermitian products are |kf|², so this is ln(1 - |kf|²) there.
        let coeffs = reflect(&prepared, config)?;
        for (p, power) in coeffs.products().into_iter().zip(coeffs.powers()) {
            log_det = log_det + T::from_real(power as f64) * (-p).ln_1p();
        }
    }
    Ok(log_det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    #[test]
    fn scalar_matrix() {
        assert_abs_diff_eq!(log_det_toeplitz(&[5.0_f64]).unwrap(), 5.0_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn identity() {
        assert_eq!(log_det_toeplitz(&[1.0_f64, 0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn indefinite_real_is_nan() {
        // det = -3.25
        assert!(log_det_toeplitz(&[1.0_f64, 2.0, 0.5]).unwrap().is_nan());
    }

    #[test]
    fn complex_negative_diagonal_is_not_real() {
        let c = [Complex64::new(-2.0, 0.0)];
        let got = log_det_toeplitz(&c).unwrap();
        assert_abs_diff_eq!(got.im.abs(), std::f64::consts::PI, epsilon = 1e-15);
    }

    #[test]
    fn general_matches_hermitian_on_symmetric_input() {
        let c = [3.0_f64, 1.0, -0.5, 0.25];
        let herm = log_det_toeplitz(&c).unwrap();
        let general = log_det_toeplitz((&c, &c)).unwrap();
        assert_abs_diff_eq!(herm, general, epsilon = 1e-12);
    }
}
