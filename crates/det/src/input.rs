//! Toeplitz descriptors and input preparation.

use std::borrow::Cow;

use ndarray::Array2;
use toeplitz_levinson::ToeplitzScalar;

use crate::error::ToeplitzError;

/// A Toeplitz matrix described by its first column and first row.
///
/// The matrix is `T[i, j] = c[i - j]` for `i >= j` and `r[j - i]` otherwise.
///
/// A bare sequence converts into the Hermitian form (row `r = conj(c)`, which
/// is the symmetric matrix for real input); a pair `(c, r)` converts into the
/// general form.
///
/// # Example
///
/// ```
/// use toeplitz_det::ToeplitzInput;
///
/// let c = [2.0, 0.5, 0.1];
/// let sym: ToeplitzInput<'_, f64> = (&c).into();
/// assert!(sym.is_hermitian());
///
/// let r = [2.0, 0.3, 0.2];
/// let general: ToeplitzInput<'_, f64> = (&c, &r).into();
/// assert_eq!(general.dim(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToeplitzInput<'a, T> {
    /// Hermitian (or real symmetric) matrix given by its first column.
    Hermitian(&'a [T]),
    /// General matrix given by its first column `c` and first row `r`.
    General {
        /// First column.
        c: &'a [T],
        /// First row.
        r: &'a [T],
    },
}

impl<'a, T: ToeplitzScalar> ToeplitzInput<'a, T> {
    /// Creates a Hermitian descriptor from the first column.
    pub fn hermitian(c: &'a [T]) -> Self {
        Self::Hermitian(c)
    }

    /// Creates a general descriptor from the first column and first row.
    pub fn general(c: &'a [T], r: &'a [T]) -> Self {
        Self::General { c, r }
    }

    /// Returns the first column.
    pub fn column(&self) -> &'a [T] {
        match *self {
            Self::Hermitian(c) | Self::General { c, .. } => c,
        }
    }

    /// Returns the first row, conjugating the column for Hermitian input.
    pub fn row(&self) -> Cow<'a, [T]> {
        match *self {
            Self::Hermitian(c) => Cow::Owned(c.iter().map(|z| z.conj()).collect()),
            Self::General { r, .. } => Cow::Borrowed(r),
        }
    }

    /// Returns `true` for the Hermitian form.
    pub fn is_hermitian(&self) -> bool {
        matches!(self, Self::Hermitian(_))
    }

    /// Returns the matrix dimension `n` (length of the first column).
    pub fn dim(&self) -> usize {
        self.column().len()
    }

    /// Materializes the dense n×n matrix.
    ///
    /// Intended for cross-checking against a general determinant routine;
    /// costs O(n²) memory.
    ///
    /// # Errors
    ///
    /// Same invalid-input conditions as the determinant entry points.
    pub fn to_dense(&self) -> Result<Array2<T>, ToeplitzError> {
        let prepared = prepare(*self)?;
        let c = prepared.c;
        let r = self.row();
        let n = prepared.dim();
        Ok(Array2::from_shape_fn((n, n), |(i, j)| {
            if i >= j { c[i - j] } else { r[j - i] }
        }))
    }
}

impl<'a, T> From<&'a [T]> for ToeplitzInput<'a, T> {
    fn from(c: &'a [T]) -> Self {
        Self::Hermitian(c)
    }
}

impl<'a, T> From<&'a Vec<T>> for ToeplitzInput<'a, T> {
    fn from(c: &'a Vec<T>) -> Self {
        Self::Hermitian(c)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ToeplitzInput<'a, T> {
    fn from(c: &'a [T; N]) -> Self {
        Self::Hermitian(c)
    }
}

impl<'a, T> From<(&'a [T], &'a [T])> for ToeplitzInput<'a, T> {
    fn from((c, r): (&'a [T], &'a [T])) -> Self {
        Self::General { c, r }
    }
}

impl<'a, T> From<(&'a Vec<T>, &'a Vec<T>)> for ToeplitzInput<'a, T> {
    fn from((c, r): (&'a Vec<T>, &'a Vec<T>)) -> Self {
        Self::General { c, r }
    }
}

impl<'a, T, const N: usize, const M: usize> From<(&'a [T; N], &'a [T; M])>
    for ToeplitzInput<'a, T>
{
    fn from((c, r): (&'a [T; N], &'a [T; M])) -> Self {
        Self::General { c, r }
    }
}

/// A validated descriptor, ready for the recursion.
#[derive(Debug)]
pub(crate) struct Prepared<'a, T> {
    pub(crate) c: &'a [T],
    /// `None` for Hermitian input, whose row is `conj(c)`.
    pub(crate) r: Option<&'a [T]>,
}

impl<T: ToeplitzScalar> Prepared<'_, T> {
    pub(crate) fn dim(&self) -> usize {
        self.c.len()
    }

    /// The shared diagonal value `c[0] == r[0]`.
    pub(crate) fn corner(&self) -> T {
        self.c[0]
    }

    pub(crate) fn is_hermitian(&self) -> bool {
        self.r.is_none()
    }
}

fn check_finite<T: ToeplitzScalar>(
    values: &[T],
    input: &'static str,
) -> Result<(), ToeplitzError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ToeplitzError::NonFiniteInput { input })
    }
}

/// Validates a descriptor.
///
/// Checks, in order: non-empty, equal lengths, finite entries, and the shared
/// diagonal `c[0] == r[0]` (for Hermitian input, `c[0] == conj(c[0])`).
pub(crate) fn prepare<T: ToeplitzScalar>(
    input: ToeplitzInput<'_, T>,
) -> Result<Prepared<'_, T>, ToeplitzError> {
    let (c, r) = match input {
        ToeplitzInput::Hermitian(c) => (c, None),
        ToeplitzInput::General { c, r } => (c, Some(r)),
    };

    let Some(&c0) = c.first() else {
        return Err(ToeplitzError::EmptyInput);
    };
    if let Some(r) = r {
        if r.len() != c.len() {
            return Err(ToeplitzError::LengthMismatch {
                c: c.len(),
                r: r.len(),
            });
        }
    }

    check_finite(c, "c")?;
    let r0 = match r {
        Some(r) => {
            check_finite(r, "r")?;
            r[0]
        }
        None => c0.conj(),
    };
    if c0 != r0 {
        return Err(ToeplitzError::DiagonalMismatch);
    }

    Ok(Prepared { c, r })
}
