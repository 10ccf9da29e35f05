//! # toeplitz-levinson
//!
//! Reflection coefficients of Toeplitz matrices via the Levinson–Durbin
//! recursion, generalized to non-symmetric and complex input.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["(c, r)"] -->|"levinson_general(&c, &r, &config)?"| C["ReflectionCoefficients"]
//!     B["c (Hermitian)"] -->|"levinson_hermitian(&c, &config)?"| C
//!     C --> D[".forward(): kf"]
//!     C --> E[".backward(): kb"]
//!     C --> F[".products(): kf·kb"]
//!     C --> G[".powers(): n - k"]
//! ```
//!
//! The coefficients determine every leading principal minor:
//!
//! ```text
//! det(T_n) = c[0]^n · Π_{k=1}^{n-1} (1 - kf[k]·kb[k])^(n-k)
//! ```
//!
//! Scalars are `f64` or [`num_complex::Complex64`], see [`ToeplitzScalar`].
//!
//! ## Quick Start
//!
//! ```
//! use toeplitz_levinson::{LevinsonConfig, ToeplitzScalar, levinson_hermitian};
//!
//! let coeffs = levinson_hermitian(&[2.0_f64, 0.5, 0.1], &LevinsonConfig::default()).unwrap();
//! let det: f64 = 2.0_f64.powi(3)
//!     * coeffs
//!         .products()
//!         .iter()
//!         .zip(coeffs.powers())
//!         .map(|(p, power)| ToeplitzScalar::powu(1.0 - p, power))
//!         .product::<f64>();
//! assert!((det - 7.03).abs() < 1e-12);
//! ```

mod coefficients;
mod config;
mod error;
mod recursion;
mod scalar;

pub use coefficients::ReflectionCoefficients;
pub use config::LevinsonConfig;
pub use error::LevinsonError;
pub use recursion::{levinson_general, levinson_hermitian};
pub use scalar::ToeplitzScalar;
