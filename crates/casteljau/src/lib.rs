// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Compensated de Casteljau
//!
//! Accurate evaluation of polynomials in Bernstein (Bézier) form using error-free
//! transformations, without resorting to arbitrary-precision arithmetic.
//!
//! ## Features
//!
//! - Plain de Casteljau evaluation, valid for any real parameter (extrapolation included).
//! - K-fold compensated de Casteljau: returns a K-term expansion whose exact sum is as
//!   accurate as if the triangle had been run in K-fold working precision.
//! - Compression of expansions to one double with K-fold compensated summation.
//! - Horner (plain and K-fold compensated) for monomial form, and the VS method for Bernstein form.
//! - Condition numbers and a priori error bounds.
//! - An exact rational oracle for measuring forward errors.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Example
//!
//! ```
//! use kfold_casteljau::{evaluate_basic, evaluate_compensated};
//!
//! // 4(1 - s)^3 - s^3
//! let coeffs = [4.0, 0.0, 0.0, -1.0];
//! let plain = evaluate_basic(0.5, &coeffs).unwrap();
//! let expansion = evaluate_compensated(0.5, &coeffs, 3).unwrap();
//! assert_eq!(expansion.leading(), Some(plain));
//! assert_eq!(expansion.compress(3).unwrap(), 0.375);
//! ```

pub mod bernstein;
pub mod condition;
pub mod de_casteljau;
pub mod errors;
pub mod exact;
pub mod expansion;
pub mod horner;
pub mod vs;

pub use bernstein::BernsteinPolynomial;
pub use de_casteljau::error_buffer_capacity;
pub use errors::{CasteljauError, CasteljauResult};
pub use expansion::{compress, Expansion};
pub use kfold_eft::{sum_k, two_prod, two_sum, vec_sum};

/// Evaluates the Bernstein polynomial `coeffs` at `s` with plain de Casteljau.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty.
pub fn evaluate_basic(s: f64, coeffs: &[f64]) -> CasteljauResult<f64> {
    de_casteljau::basic(s, coeffs)
}

/// Evaluates the Bernstein polynomial `coeffs` at `s` with `order`-fold compensation.
///
/// The returned expansion has exactly `order` terms; with `order == 1` it holds the
/// value of [`evaluate_basic`].
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty and
/// `CasteljauError::InvalidOrder` if `order` is zero.
pub fn evaluate_compensated(s: f64, coeffs: &[f64], order: usize) -> CasteljauResult<Expansion> {
    de_casteljau::compensated(s, coeffs, order).map(Expansion::new)
}
