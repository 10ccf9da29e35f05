//! Levinson–Durbin recursion generalized to non-symmetric Toeplitz matrices.
//!
//! The matrix is `T[i, j] = c[i - j]` for `i >= j` and `r[j - i]` otherwise.
//! At order `k` the forward predictor `a` (with `a[0] = 1`) and the backward
//! predictor `b` (with `b[k-1] = 1`) satisfy
//!
//! ```text
//! T_k a = (e, 0, …, 0)ᵀ        T_k b = (0, …, 0, e)ᵀ
//! ```
//!
//! Forward and backward prediction-error energies follow the same update from
//! the same seed `c[0]`, so a single running value `e` stands for both.

use tracing::debug;

use crate::coefficients::ReflectionCoefficients;
use crate::config::LevinsonConfig;
use crate::error::LevinsonError;
use crate::scalar::ToeplitzScalar;

fn validate<T: ToeplitzScalar>(
    c: &[T],
    r: &[T],
    config: &LevinsonConfig,
) -> Result<(), LevinsonError> {
    config.validate()?;
    if c.is_empty() {
        return Err(LevinsonError::EmptyInput);
    }
    if c.len() != r.len() {
        return Err(LevinsonError::LengthMismatch {
            c: c.len(),
            r: r.len(),
        });
    }
    if c[0] != r[0] {
        return Err(LevinsonError::DiagonalMismatch);
    }
    Ok(())
}

/// Fills orders `k..n-1` with `kf = kb = 1`, so that `1 - kf·kb = 0` from
/// order `k` on.
fn mark_breakdown<T: ToeplitzScalar>(coeffs: &mut Vec<T>, n: usize) {
    coeffs.resize(n - 1, T::one());
}

/// Computes forward and backward reflection coefficients of the Toeplitz
/// matrix with first column `c` and first row `r`.
///
/// Runs in O(n²) time and O(n) memory.
///
/// When the prediction-error energy vanishes at some order (an exactly
/// singular leading submatrix, or a non-generic breakdown), the recursion
/// stops there instead of dividing by zero and reports `kf = kb = 1` for that
/// order and all later ones; see [`ReflectionCoefficients::breakdown`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LevinsonError::InvalidBreakdownTol`] | `config` fails validation |
/// | [`LevinsonError::EmptyInput`] | `c` is empty |
/// | [`LevinsonError::LengthMismatch`] | `c.len() != r.len()` |
/// | [`LevinsonError::DiagonalMismatch`] | `c[0] != r[0]` |
///
/// # Example
///
/// ```
/// use toeplitz_levinson::{LevinsonConfig, levinson_general};
///
/// // [[2, 1], [4, 2]] has determinant 2·2 - 1·4 = 0.
/// let coeffs = levinson_general(&[2.0_f64, 4.0], &[2.0, 1.0], &LevinsonConfig::default()).unwrap();
/// assert_eq!(coeffs.products(), vec![1.0]);
/// ```
#[tracing::instrument(skip_all, fields(n = c.len()))]
pub fn levinson_general<T: ToeplitzScalar>(
    c: &[T],
    r: &[T],
    config: &LevinsonConfig,
) -> Result<ReflectionCoefficients<T>, LevinsonError> {
    validate(c, r, config)?;

    let n = c.len();
    let threshold = config.breakdown_tol() * c[0].abs();

    let mut forward = Vec::with_capacity(n - 1);
    let mut backward = Vec::with_capacity(n - 1);
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    a.push(T::one());
    b.push(T::one());
    let mut a_next = Vec::with_capacity(n);
    let mut b_next = Vec::with_capacity(n);
    let mut error = c[0];
    let mut breakdown = None;

    for k in 1..n {
        if error.abs() <= threshold {
            debug!(order = k, "prediction error vanished; recursion stopped");
            breakdown = Some(k);
            mark_breakdown(&mut forward, n);
            mark_breakdown(&mut backward, n);
            break;
        }

        // Residual of each predictor against the next row/column of T_{k+1}.
        let mut alpha = T::zero();
        let mut beta = T::zero();
        for j in 0..k {
            alpha = alpha + c[k - j] * a[j];
            beta = beta + r[j + 1] * b[j];
        }

        let kf = alpha / error;
        let kb = beta / error;

        // a' = [a; 0] - kf·[0; b],  b' = [0; b] - kb·[a; 0]
        a_next.clear();
        b_next.clear();
        for j in 0..=k {
            let aj = if j < k { a[j] } else { T::zero() };
            let bj = if j > 0 { b[j - 1] } else { T::zero() };
            a_next.push(aj - kf * bj);
            b_next.push(bj - kb * aj);
        }
        std::mem::swap(&mut a, &mut a_next);
        std::mem::swap(&mut b, &mut b_next);

        error = error * (T::one() - kf * kb);
        forward.push(kf);
        backward.push(kb);
    }

    Ok(ReflectionCoefficients::new(
        n,
        forward,
        Some(backward),
        error,
        breakdown,
    ))
}

/// Computes the forward reflection coefficients of the Hermitian (real
/// symmetric, for `f64`) Toeplitz matrix with first column `c` and first row
/// `conj(c)`.
///
/// The backward predictor is the reversed conjugate of the forward one and
/// `kb = conj(kf)`, so only the forward half of
/// [`levinson_general`] is carried out. The energy stays real and is updated
/// by `1 - |kf|²`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LevinsonError::InvalidBreakdownTol`] | `config` fails validation |
/// | [`LevinsonError::EmptyInput`] | `c` is empty |
/// | [`LevinsonError::DiagonalMismatch`] | `c[0]` is not real |
///
/// # Example
///
/// ```
/// use toeplitz_levinson::{LevinsonConfig, levinson_hermitian};
///
/// let coeffs = levinson_hermitian(&[2.0_f64, 0.5, 0.1], &LevinsonConfig::default()).unwrap();
/// assert_eq!(coeffs.forward()[0], 0.25);
/// ```
#[tracing::instrument(skip_all, fields(n = c.len()))]
pub fn levinson_hermitian<T: ToeplitzScalar>(
    c: &[T],
    config: &LevinsonConfig,
) -> Result<ReflectionCoefficients<T>, LevinsonError> {
    config.validate()?;
    let Some(&c0) = c.first() else {
        return Err(LevinsonError::EmptyInput);
    };
    if c0 != c0.conj() {
        return Err(LevinsonError::DiagonalMismatch);
    }

    let n = c.len();
    let threshold = config.breakdown_tol() * c0.abs();

    let mut forward = Vec::with_capacity(n - 1);
    let mut a = Vec::with_capacity(n);
    a.push(T::one());
    let mut a_next = Vec::with_capacity(n);
    let mut error = c0.re();
    let mut breakdown = None;

    for k in 1..n {
        if error.abs() <= threshold {
            debug!(order = k, "prediction error vanished; recursion stopped");
            breakdown = Some(k);
            mark_breakdown(&mut forward, n);
            break;
        }

        let mut alpha = T::zero();
        for j in 0..k {
            alpha = alpha + c[k - j] * a[j];
        }
        let kf = alpha / T::from_real(error);

        // a' = [a; 0] - kf·[0; rev(conj(a))]
        a_next.clear();
        for j in 0..=k {
            let aj = if j < k { a[j] } else { T::zero() };
            let bj = if j > 0 { a[k - j].conj() } else { T::zero() };
            a_next.push(aj - kf * bj);
        }
        std::mem::swap(&mut a, &mut a_next);

        error *= 1.0 - kf.norm_sqr();
        forward.push(kf);
    }

    Ok(ReflectionCoefficients::new(
        n,
        forward,
        None,
        T::from_real(error),
        breakdown,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn cfg() -> LevinsonConfig {
        LevinsonConfig::default()
    }

    #[test]
    fn scalar_matrix_has_no_orders() {
        let coeffs = levinson_general(&[3.0_f64], &[3.0], &cfg()).unwrap();
        assert!(coeffs.is_empty());
        assert_eq!(coeffs.prediction_error(), 3.0);
        assert_eq!(coeffs.breakdown(), None);
    }

    #[test]
    fn two_by_two_general() {
        // [[c0, r1], [c1, c0]]: kf = c1/c0, kb = r1/c0
        let coeffs = levinson_general(&[2.0_f64, 0.5], &[2.0, 0.3], &cfg()).unwrap();
        assert_abs_diff_eq!(coeffs.forward()[0], 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(coeffs.backward()[0], 0.15, epsilon = 1e-15);
        // det = 4 - 0.15 = 3.85 = c0 · e_1
        assert_abs_diff_eq!(coeffs.prediction_error(), 1.925, epsilon = 1e-15);
    }

    #[test]
    fn three_by_three_symmetric() {
        let coeffs = levinson_hermitian(&[2.0_f64, 0.5, 0.1], &cfg()).unwrap();
        let kf = coeffs.forward();
        assert_abs_diff_eq!(kf[0], 0.25, epsilon = 1e-15);
        // alpha = 0.1 - 0.25·0.5 = -0.025, e_1 = 1.875
        assert_abs_diff_eq!(kf[1], -0.025 / 1.875, epsilon = 1e-15);
        // det(T_3) / det(T_2) = 7.03 / 3.75
        assert_abs_diff_eq!(coeffs.prediction_error(), 7.03 / 3.75, epsilon = 1e-12);
    }

    #[test]
    fn general_matches_hermitian_on_symmetric_input() {
        let c = [4.0_f64, -1.0, 0.5, 0.25, -0.125];
        let herm = levinson_hermitian(&c, &cfg()).unwrap();
        let general = levinson_general(&c, &c, &cfg()).unwrap();
        for (a, b) in herm.products().iter().zip(general.products()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-14);
        }
        for (a, b) in herm.backward().iter().zip(general.backward().iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-14);
        }
    }

    #[test]
    fn complex_hermitian_products_match_general() {
        let c = [
            Complex64::new(2.0, 0.0),
            Complex64::new(0.5, -0.1),
            Complex64::new(0.1, 0.2),
        ];
        let r: Vec<Complex64> = c.iter().map(|z| z.conj()).collect();
        let herm = levinson_hermitian(&c, &cfg()).unwrap();
        let general = levinson_general(&c, &r, &cfg()).unwrap();
        for (a, b) in herm.products().iter().zip(general.products()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-14);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-14);
        }
    }

    #[test]
    fn zero_diagonal_breaks_down_at_first_order() {
        let coeffs = levinson_general(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 3.0], &cfg()).unwrap();
        assert_eq!(coeffs.breakdown(), Some(1));
        assert_eq!(coeffs.products(), vec![1.0, 1.0]);
    }

    #[test]
    fn singular_leading_block_breaks_down() {
        // T_2 = [[1, 1], [1, 1]] is singular, so e_1 = 0 and order 2 cannot run.
        let coeffs = levinson_hermitian(&[1.0_f64, 1.0, 0.5], &cfg()).unwrap();
        assert_eq!(coeffs.forward()[0], 1.0);
        assert_eq!(coeffs.breakdown(), Some(2));
        assert_eq!(coeffs.forward(), &[1.0, 1.0]);
    }

    #[test]
    fn tolerance_triggers_early_breakdown() {
        // e_1 = 1 - 0.999999² ≈ 2e-6, below 1e-3 · |c0|
        let config = LevinsonConfig::new().with_breakdown_tol(1e-3);
        let coeffs = levinson_hermitian(&[1.0_f64, 0.999_999, 0.5], &config).unwrap();
        assert_eq!(coeffs.breakdown(), Some(2));
    }

    #[test]
    fn rejects_empty() {
        let err = levinson_general::<f64>(&[], &[], &cfg()).unwrap_err();
        assert_eq!(err, LevinsonError::EmptyInput);
        let err = levinson_hermitian::<f64>(&[], &cfg()).unwrap_err();
        assert_eq!(err, LevinsonError::EmptyInput);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = levinson_general(&[1.0_f64, 2.0], &[1.0], &cfg()).unwrap_err();
        assert_eq!(err, LevinsonError::LengthMismatch { c: 2, r: 1 });
    }

    #[test]
    fn rejects_diagonal_mismatch() {
        let err = levinson_general(&[2.0_f64, 1.0, 1.0], &[3.0, 1.0, 1.0], &cfg()).unwrap_err();
        assert_eq!(err, LevinsonError::DiagonalMismatch);
    }

    #[test]
    fn rejects_complex_hermitian_diagonal() {
        let c = [Complex64::new(1.0, 0.5), Complex64::new(0.1, 0.0)];
        let err = levinson_hermitian(&c, &cfg()).unwrap_err();
        assert_eq!(err, LevinsonError::DiagonalMismatch);
    }

    #[test]
    fn rejects_invalid_config_before_input() {
        let config = LevinsonConfig::new().with_breakdown_tol(-1.0);
        let err = levinson_general::<f64>(&[], &[], &config).unwrap_err();
        assert_eq!(err, LevinsonError::InvalidBreakdownTol(-1.0));
    }
}
