//! # toeplitz-det
//!
//! Determinants of n×n Toeplitz matrices in O(n²) time, from the first
//! column `c` and first row `r` (with `c[0] == r[0]`), without forming the
//! matrix.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["c  or  (c, r)"] -->|"validate"| B["ToeplitzInput"]
//!     B -->|"Levinson recursion"| C["ReflectionCoefficients"]
//!     C -->|"slogdet_toeplitz"| D["ToeplitzDeterminant { sign, logabsdet }"]
//!     C -->|"log_det_toeplitz"| E["ln det  (det > 0 only)"]
//!     C -->|"det_toeplitz"| F["det  (may overflow)"]
//! ```
//!
//! All three reductions rest on
//!
//! ```text
//! det(T_n) = c[0]^n · Π_{k=1}^{n-1} (1 - kf[k]·kb[k])^(n-k)
//! ```
//!
//! where `kf`, `kb` are the forward and backward reflection coefficients of
//! the recursion (see [`toeplitz_levinson`]).
//!
//! ## Choosing an Entry Point
//!
//! | Function | Returns | Valid for |
//! |----------|---------|-----------|
//! | [`slogdet_toeplitz`] | sign and `ln(abs(det))` | any matrix, including singular |
//! | [`log_det_toeplitz`] | `ln det` | real positive determinant (unchecked) |
//! | [`det_toeplitz`] | `det` | moderate `n` and `c[0]` (no overflow guard) |
//!
//! ## Quick Start
//!
//! ```
//! use toeplitz_det::{Complex64, det_toeplitz, slogdet_toeplitz};
//!
//! // Real symmetric: pass the first column alone.
//! let res = slogdet_toeplitz(&[2.0_f64, 0.5, 0.1]).unwrap();
//! assert_eq!(res.sign, 1.0);
//!
//! // Complex non-symmetric: pass (c, r).
//! let c = [Complex64::new(2.0, 0.0), Complex64::new(0.5, -0.1)];
//! let r = [Complex64::new(2.0, 0.0), Complex64::new(0.3, 0.1)];
//! let det = det_toeplitz((&c, &r)).unwrap();
//! assert!((det - (c[0] * c[0] - c[1] * r[1])).norm() < 1e-14);
//! ```

mod det;
mod error;
mod input;
mod log_det;
mod reflect;
mod result;
mod slogdet;

pub use det::{det_toeplitz, det_toeplitz_with_config};
pub use error::ToeplitzError;
pub use input::ToeplitzInput;
pub use log_det::{log_det_toeplitz, log_det_toeplitz_with_config};
pub use reflect::reflection_coefficients;
pub use result::ToeplitzDeterminant;
pub use slogdet::{slogdet_toeplitz, slogdet_toeplitz_with_config};

// Re-export the types that appear in this crate's API.
pub use num_complex::Complex64;
pub use toeplitz_levinson::{LevinsonConfig, LevinsonError, ReflectionCoefficients, ToeplitzScalar};
