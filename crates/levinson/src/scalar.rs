//! Scalar types the recursion operates on.
//!
//! Toeplitz descriptors are either real (`f64`) or complex (`Complex<f64>`).
//! [`ToeplitzScalar`] collects the arithmetic both the recursion and the
//! determinant combiners need, so each algorithm is written once.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;

/// A real or complex scalar entry of a Toeplitz matrix.
///
/// Implemented for `f64` and [`Complex64`].
pub trait ToeplitzScalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Embeds a real number.
    fn from_real(x: f64) -> Self;

    /// Real part.
    fn re(self) -> f64;

    /// Imaginary part (always `0.0` for `f64`).
    fn im(self) -> f64;

    /// Complex conjugate (identity for `f64`).
    fn conj(self) -> Self;

    /// Modulus `|z|`.
    fn abs(self) -> f64;

    /// Squared modulus `|z|²`.
    fn norm_sqr(self) -> f64;

    /// Returns `true` when every component is finite.
    fn is_finite(self) -> bool;

    /// Natural logarithm. For `f64` a negative argument yields NaN.
    fn ln(self) -> Self;

    /// `ln(1 + z)`, accurate for small `|z|`.
    ///
    /// For `f64` an argument below `-1` yields NaN.
    fn ln_1p(self) -> Self;

    /// Integer power `self^exp`.
    fn powu(self, exp: usize) -> Self;

    /// Unit-modulus phase `z / |z|`, or zero for `z == 0`.
    fn unit(self) -> Self {
        let modulus = self.abs();
        if modulus == 0.0 {
            Self::zero()
        } else {
            self / Self::from_real(modulus)
        }
    }

    /// Returns `true` when `self` is exactly zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

impl ToeplitzScalar for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline(always)]
    fn one() -> Self {
        1.0
    }

    #[inline(always)]
    fn from_real(x: f64) -> Self {
        x
    }

    #[inline(always)]
    fn re(self) -> f64 {
        self
    }

    #[inline(always)]
    fn im(self) -> f64 {
        0.0
    }

    #[inline(always)]
    fn conj(self) -> Self {
        self
    }

    #[inline(always)]
    fn abs(self) -> f64 {
        f64::abs(self)
    }

    #[inline(always)]
    fn norm_sqr(self) -> f64 {
        self * self
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline(always)]
    fn ln_1p(self) -> Self {
        f64::ln_1p(self)
    }

    #[inline(always)]
    fn powu(self, exp: usize) -> Self {
        match i32::try_from(exp) {
            Ok(e) => self.powi(e),
            Err(_) => self.powf(exp as f64),
        }
    }
}

impl ToeplitzScalar for Complex64 {
    #[inline(always)]
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    #[inline(always)]
    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    #[inline(always)]
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }

    #[inline(always)]
    fn re(self) -> f64 {
        self.re
    }

    #[inline(always)]
    fn im(self) -> f64 {
        self.im
    }

    #[inline(always)]
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }

    #[inline(always)]
    fn abs(self) -> f64 {
        self.norm()
    }

    #[inline(always)]
    fn norm_sqr(self) -> f64 {
        Complex64::norm_sqr(&self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        Complex64::is_finite(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn ln_1p(self) -> Self {
        // Real axis to the right of the branch point: defer to the real ln_1p.
        if self.im == 0.0 && self.re >= -1.0 {
            return Complex64::new(self.re.ln_1p(), 0.0);
        }
        // Away from the origin 1 + z is exact enough, and near z = -1 the
        // expanded form below cancels to -1.
        if self.norm() >= 0.5 {
            return (Complex64::new(1.0, 0.0) + self).ln();
        }
        // |1 + z|² - 1 = 2·Re(z) + |z|², which keeps precision when |z| is small.
        let re = 0.5 * (2.0 * self.re + Complex64::norm_sqr(&self)).ln_1p();
        let im = self.im.atan2(1.0 + self.re);
        Complex64::new(re, im)
    }

    fn powu(self, exp: usize) -> Self {
        match u32::try_from(exp) {
            Ok(e) => Complex64::powu(&self, e),
            Err(_) => Complex64::powf(self, exp as f64),
        }
    }
}
