//! Configuration for the reflection-coefficient recursion.

use crate::error::LevinsonError;

/// Configuration for [`levinson_general`](crate::levinson_general) and
/// [`levinson_hermitian`](crate::levinson_hermitian).
///
/// # Example
///
/// ```
/// use toeplitz_levinson::LevinsonConfig;
///
/// let config = LevinsonConfig::new().with_breakdown_tol(1e-14);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevinsonConfig {
    /// Relative threshold on the prediction-error energy, scaled by `|c[0]|`.
    breakdown_tol: f64,
}

impl LevinsonConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `breakdown_tol = 0.0`, so the recursion only stops when the
    /// prediction-error energy is exactly zero.
    pub fn new() -> Self {
        Self { breakdown_tol: 0.0 }
    }

    /// Sets the breakdown tolerance.
    ///
    /// At each order the recursion stops when `|e| <= breakdown_tol * |c[0]|`,
    /// where `e` is the running prediction-error energy.
    pub fn with_breakdown_tol(mut self, tol: f64) -> Self {
        self.breakdown_tol = tol;
        self
    }

    /// Returns the breakdown tolerance.
    pub fn breakdown_tol(&self) -> f64 {
        self.breakdown_tol
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `breakdown_tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), LevinsonError> {
        if !self.breakdown_tol.is_finite() || self.breakdown_tol < 0.0 {
            return Err(LevinsonError::InvalidBreakdownTol(self.breakdown_tol));
        }
        Ok(())
    }
}

impl Default for LevinsonConfig {
    fn default() -> Self {
        Self::new()
    }
}
