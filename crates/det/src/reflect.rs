//! Bridge from a validated descriptor to the recursion crate.

use toeplitz_levinson::{
    LevinsonConfig, ReflectionCoefficients, ToeplitzScalar, levinson_general, levinson_hermitian,
};

use crate::error::ToeplitzError;
use crate::input::{Prepared, ToeplitzInput, prepare};

/// Runs the recursion matching the shape of the descriptor: the Hermitian
/// shortcut when only `c` was given, the general recursion otherwise.
pub(crate) fn reflect<T: ToeplitzScalar>(
    prepared: &Prepared<'_, T>,
    config: &LevinsonConfig,
) -> Result<ReflectionCoefficients<T>, ToeplitzError> {
    let coeffs = match prepared.r {
        None => levinson_hermitian(prepared.c, config)?,
        Some(r) => levinson_general(prepared.c, r, config)?,
    };
    Ok(coeffs)
}

/// Computes the reflection coefficients of a Toeplitz descriptor.
///
/// This is the recursion behind every determinant entry point, exposed for
/// callers who need the coefficients themselves (for example, partial
/// autocorrelations of a stationary covariance sequence).
///
/// # Errors
///
/// Returns [`ToeplitzError`] for invalid input or configuration.
///
/// # Example
///
/// ```
/// use toeplitz_det::{LevinsonConfig, reflection_coefficients};
///
/// let coeffs = reflection_coefficients(&[1.0_f64, 0.5, 0.25], &LevinsonConfig::default()).unwrap();
/// // An AR(1) autocovariance has a single non-zero partial autocorrelation.
/// assert_eq!(coeffs.forward(), &[0.5, 0.0]);
/// ```
pub fn reflection_coefficients<'a, T: ToeplitzScalar>(
    input: impl Into<ToeplitzInput<'a, T>>,
    config: &LevinsonConfig,
) -> Result<ReflectionCoefficients<T>, ToeplitzError> {
    config.validate()?;
    let prepared = prepare(input.into())?;
    reflect(&prepared, config)
}
