//! Error types for the toeplitz-det crate.

use toeplitz_levinson::LevinsonError;

/// Error type for all fallible operations in the toeplitz-det crate.
///
/// `EmptyInput`, `LengthMismatch`, `NonFiniteInput` and `DiagonalMismatch`
/// make up the invalid-input class: they are reported before the recursion
/// runs. A violated positivity precondition of
/// [`log_det_toeplitz`](crate::log_det_toeplitz) is not an error; it shows up
/// in the returned value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToeplitzError {
    /// Returned when the first column is empty.
    #[error("input is empty")]
    EmptyInput,

    /// Returned when the first column and first row differ in length.
    #[error("length mismatch: first column has {c} entries, first row has {r}")]
    LengthMismatch {
        /// Length of the first column.
        c: usize,
        /// Length of the first row.
        r: usize,
    },

    /// Returned when an input sequence contains NaN or infinite entries.
    #[error("input {input} contains non-finite values")]
    NonFiniteInput {
        /// Which sequence was rejected (`"c"` or `"r"`).
        input: &'static str,
    },

    /// Returned when `c[0] != r[0]`. For Hermitian input, `c[0]` must be real.
    #[error("c[0] must equal r[0] (diagonal element)")]
    DiagonalMismatch,

    /// Wrapped error from the reflection-coefficient recursion.
    #[error(transparent)]
    Recursion(#[from] LevinsonError),
}

impl ToeplitzError {
    /// Returns `true` for the invalid-input class of errors.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::EmptyInput
            | Self::LengthMismatch { .. }
            | Self::NonFiniteInput { .. }
            | Self::DiagonalMismatch => true,
            Self::Recursion(inner) => !matches!(inner, LevinsonError::InvalidBreakdownTol(_)),
        }
    }
}
