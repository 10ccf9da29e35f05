//! Signed log-determinant.

use toeplitz_levinson::{LevinsonConfig, ToeplitzScalar};
use tracing::debug;

use crate::error::ToeplitzError;
use crate::input::{ToeplitzInput, prepare};
use crate::reflect::reflect;
use crate::result::ToeplitzDeterminant;

/// `ln|1 - p|` for one recursion order.
///
/// Uses `ln_1p(-p)` while `|p| < 1` to avoid cancellation for small `p`, and
/// `ln|p - 1|` otherwise, where the factor may be negative (or, for complex
/// input, have any phase).
fn log_abs_factor<T: ToeplitzScalar>(p: T) -> f64 {
    if p.abs() < 1.0 {
        (-p).ln_1p().re()
    } else {
        (p - T::one()).abs().ln()
    }
}

/// Computes the sign and natural log of the absolute determinant of a
/// Toeplitz matrix, with the default [`LevinsonConfig`].
///
/// Valid for any determinant: positive, negative, complex or zero. A zero
/// determinant (a vanishing diagonal, an exactly singular factor, or a
/// recursion breakdown) is reported as `sign = 0, logabsdet = -inf`.
///
/// # Errors
///
/// Returns [`ToeplitzError`] when the input is empty, the lengths differ, an
/// entry is non-finite, or `c[0] != r[0]`.
///
/// # Example
///
/// ```
/// use toeplitz_det::slogdet_toeplitz;
///
/// // [[1, 2, 0.5], [2, 1, 2], [0.5, 2, 1]] has determinant -3.25.
/// let res = slogdet_toeplitz(&[1.0_f64, 2.0, 0.5]).unwrap();
/// assert_eq!(res.sign, -1.0);
/// assert!((res.logabsdet - 3.25_f64.ln()).abs() < 1e-12);
/// ```
pub fn slogdet_toeplitz<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
) -> Result<ToeplitzDeterminant<T>, ToeplitzError> {
    slogdet_toeplitz_with_config(input, &LevinsonConfig::default())
}

/// [`slogdet_toeplitz`] with an explicit recursion configuration.
///
/// # Errors
///
/// As [`slogdet_toeplitz`], plus [`ToeplitzError::Recursion`] when `config`
/// fails validation.
#[tracing::instrument(skip_all)]
pub fn slogdet_toeplitz_with_config<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
    config: &LevinsonConfig,
) -> Result<ToeplitzDeterminant<T>, ToeplitzError> {
    config.validate()?;
    let prepared = prepare(input.into())?;
    let n = prepared.dim();
    let c0 = prepared.corner();

    if c0.is_zero() {
        debug!(n, "zero diagonal; determinant is zero");
        return Ok(ToeplitzDeterminant::singular());
    }

    let mut logabsdet = n as f64 * c0.abs().ln();
    let mut sign = c0.unit().powu(n);

    if n > 1 {
        let coeffs = reflect(&prepared, config)?;
        for (p, power) in coeffs.products().into_iter().zip(coeffs.powers()) {
            let factor = T::one() - p;
            if factor.is_zero() {
                debug!(n, breakdown = ?coeffs.breakdown(), "singular factor; determinant is zero");
                return Ok(ToeplitzDeterminant::singular());
            }
            logabsdet += power as f64 * log_abs_factor(p);
            sign = sign * factor.unit().powu(power);
        }
    }

    if logabsdet == f64::NEG_INFINITY {
        debug!(n, "log-determinant underflowed; determinant is zero");
        return Ok(ToeplitzDeterminant::singular());
    }

    // Products of unit phases drift off the unit circle for complex input.
    Ok(ToeplitzDeterminant::new(sign.unit(), logabsdet))
}
