//! Reflection-coefficient sequences produced by the recursion.

use std::borrow::Cow;

use crate::scalar::ToeplitzScalar;

/// Forward and backward reflection coefficients of an n×n Toeplitz matrix.
///
/// Entry `i` of each sequence belongs to recursion order `k = i + 1`, for
/// `k = 1..n-1`. The leading principal submatrices satisfy
///
/// ```text
/// det(T_{k+1}) = det(T_k) · e_k,    e_k = e_{k-1} · (1 - kf[k]·kb[k]),    e_0 = c[0]
/// ```
///
/// so that `det(T_n) = c[0]^n · Π_k (1 - kf[k]·kb[k])^(n-k)`.
///
/// For Hermitian input only the forward sequence is stored; the backward
/// sequence is its conjugate.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectionCoefficients<T> {
    dim: usize,
    forward: Vec<T>,
    backward: Option<Vec<T>>,
    prediction_error: T,
    breakdown: Option<usize>,
}

impl<T: ToeplitzScalar> ReflectionCoefficients<T> {
    pub(crate) fn new(
        dim: usize,
        forward: Vec<T>,
        backward: Option<Vec<T>>,
        prediction_error: T,
        breakdown: Option<usize>,
    ) -> Self {
        debug_assert_eq!(forward.len(), dim.saturating_sub(1));
        debug_assert!(backward.as_ref().is_none_or(|b| b.len() == forward.len()));
        Self {
            dim,
            forward,
            backward,
            prediction_error,
            breakdown,
        }
    }

    /// Returns the dimension `n` of the Toeplitz matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of recursion orders, `n - 1`.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns `true` for a 1×1 matrix (no recursion orders).
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Returns `true` when the coefficients came from the Hermitian shortcut.
    pub fn is_hermitian(&self) -> bool {
        self.backward.is_none()
    }

    /// Returns the forward reflection coefficients `kf[1..n-1]`.
    pub fn forward(&self) -> &[T] {
        &self.forward
    }

    /// Returns the backward reflection coefficients `kb[1..n-1]`.
    ///
    /// Borrowed for general input; computed as `conj(kf)` for Hermitian input.
    pub fn backward(&self) -> Cow<'_, [T]> {
        match &self.backward {
            Some(b) => Cow::Borrowed(b.as_slice()),
            None => Cow::Owned(self.forward.iter().map(|k| k.conj()).collect()),
        }
    }

    /// Returns the per-order products `p[k] = kf[k]·kb[k]`.
    ///
    /// For Hermitian input this is `|kf[k]|²`, exactly real.
    pub fn products(&self) -> Vec<T> {
        match &self.backward {
            Some(b) => self
                .forward
                .iter()
                .zip(b)
                .map(|(&kf, &kb)| kf * kb)
                .collect(),
            None => self
                .forward
                .iter()
                .map(|k| T::from_real(k.norm_sqr()))
                .collect(),
        }
    }

    /// Returns the exponent `n - k` attached to each order `k = 1..n-1`.
    pub fn powers(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.dim).map(move |k| self.dim - k)
    }

    /// Returns the prediction-error energy after the last completed order.
    ///
    /// Equals `det(T_n) / det(T_{n-1})` when no breakdown occurred.
    pub fn prediction_error(&self) -> T {
        self.prediction_error
    }

    /// Returns the order `k` at which the recursion stopped because the
    /// prediction-error energy vanished, if it did.
    ///
    /// Orders `k..n-1` carry `kf = kb = 1`.
    pub fn breakdown(&self) -> Option<usize> {
        self.breakdown
    }
}
