//! Error types for the toeplitz-levinson crate.

/// Error type for all fallible operations in the toeplitz-levinson crate.
///
/// Every variant is reported before the recursion starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevinsonError {
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

    /// Returned when `c[0] != r[0]`.
    #[error("c[0] must equal r[0] (diagonal element)")]
    DiagonalMismatch,

    /// Returned when the breakdown tolerance is negative or non-finite.
    #[error("invalid breakdown tolerance: {0} (must be finite and >= 0)")]
    InvalidBreakdownTol(f64),
}
