// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Conditioning of Bernstein evaluation and a priori forward error bounds.
//!
//! ## Mathematical Background
//!
//! For `p(s) = Σ b_j B_(j,n)(s)` the relative condition number of evaluation is
//!
//! `cond(p, s) = p̃(s) / |p(s)|`, with `p̃(s) = Σ |b_j| |B_(j,n)(s)|`.
//!
//! de Casteljau in double precision satisfies `|p̂ - p| / |p| ≤ γ_(2n) cond(p, s)`, while the
//! two-fold compensated variant satisfies `|p̂ - p| / |p| ≤ u + 2 γ_(3n)^2 cond(p, s)`, where
//! `γ_k = k u / (1 - k u)` and `u` is the unit roundoff.

use crate::de_casteljau::{blend, compensated, ensure_coefficients};
use crate::errors::CasteljauResult;
use kfold_eft::sum_k;

/// Unit roundoff of binary64, `2^-53`.
pub const UNIT_ROUNDOFF: f64 = f64::EPSILON / 2.0;

/// Order used to compute `p(s)` in the condition number denominator.
const DENOMINATOR_ORDER: usize = 3;

/// The classical `γ_n = n u / (1 - n u)` factor.
pub fn gamma(n: usize) -> f64 {
    let nu = n as f64 * UNIT_ROUNDOFF;
    nu / (1.0 - nu)
}

/// Relative condition number of evaluating the Bernstein polynomial `coeffs` at `s`.
///
/// `p̃(s)` is computed with de Casteljau on `|b_j|` using weights `|1 - s|` and `|s|`, which
/// covers parameters outside `[0, 1]`. `p(s)` is computed with three-fold compensation. A zero
/// of the polynomial is infinitely ill-conditioned and yields `f64::INFINITY`.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty.
pub fn condition_number(s: f64, coeffs: &[f64]) -> CasteljauResult<f64> {
    ensure_coefficients(coeffs)?;

    let magnitudes: Vec<f64> = coeffs.iter().map(|b| b.abs()).collect();
    let p_tilde = blend((1.0 - s).abs(), s.abs(), &magnitudes);

    let expansion = compensated(s, coeffs, DENOMINATOR_ORDER)?;
    let value = sum_k(&expansion, DENOMINATOR_ORDER)?;
    if value == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(p_tilde / value.abs())
}

/// A priori relative error bound for uncompensated de Casteljau, `γ_(2n) cond`.
pub fn basic_error_bound(degree: usize, cond: f64) -> f64 {
    gamma(2 * degree) * cond
}

/// A priori relative error bound for two-fold compensated de Casteljau,
/// `u + 2 γ_(3n)^2 cond`.
pub fn compensated_error_bound(degree: usize, cond: f64) -> f64 {
    let g = gamma(3 * degree);
    UNIT_ROUNDOFF + 2.0 * g * g * cond
}
