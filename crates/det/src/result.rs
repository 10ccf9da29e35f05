//! Signed log-determinant results.

use toeplitz_levinson::ToeplitzScalar;

/// Sign and log-magnitude of a determinant, `det = sign · exp(logabsdet)`.
///
/// `sign` is `±1` for real input and a unit complex number for complex
/// input. A zero determinant is `sign = 0, logabsdet = -inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToeplitzDeterminant<T> {
    /// Unit-modulus phase of the determinant, or zero.
    pub sign: T,
    /// Natural logarithm of `|det|`.
    pub logabsdet: f64,
}

impl<T: ToeplitzScalar> ToeplitzDeterminant<T> {
    pub(crate) fn new(sign: T, logabsdet: f64) -> Self {
        Self { sign, logabsdet }
    }

    /// The zero-determinant result.
    pub(crate) fn singular() -> Self {
        Self {
            sign: T::zero(),
            logabsdet: f64::NEG_INFINITY,
        }
    }

    /// Returns `true` when the determinant is zero.
    pub fn is_singular(&self) -> bool {
        self.sign.is_zero()
    }

    /// Recombines the determinant, `sign · exp(logabsdet)`.
    ///
    /// Subject to the same overflow and underflow as
    /// [`det_toeplitz`](crate::det_toeplitz).
    pub fn det(&self) -> T {
        if self.is_singular() {
            return T::zero();
        }
        self.sign * T::from_real(self.logabsdet.exp())
    }
}
