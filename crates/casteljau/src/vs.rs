// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Volk–Schumaker evaluation of Bernstein form.
//!
//! A Horner-like scheme in `(1 - s)` that carries the binomial coefficients and powers of `s`
//! along. Linear in the degree, but less accurate than de Casteljau.

use crate::de_casteljau::ensure_coefficients;
use crate::errors::CasteljauResult;

/// Evaluates `Σ b_j C(n, j) (1 - s)^(n - j) s^j` in `O(n)` operations.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty.
pub fn vs(s: f64, coeffs: &[f64]) -> CasteljauResult<f64> {
    ensure_coefficients(coeffs)?;

    let degree = coeffs.len() - 1;
    if degree == 0 {
        return Ok(coeffs[0]);
    }

    let r = 1.0 - s;
    let mut result = r * coeffs[0];
    let mut binom = 1.0;
    let mut s_pow = 1.0;
    for (j, coeff) in coeffs.iter().enumerate().take(degree).skip(1) {
        s_pow *= s;
        binom *= (degree - j + 1) as f64;
        binom /= j as f64;
        result = (result + binom * s_pow * coeff) * r;
    }

    Ok(result + s * s_pow * coeffs[degree])
}
