// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! de Casteljau evaluation, plain and K-fold compensated.
//!
//! A polynomial in Bernstein form
//!
//! `p(s) = Σ b_j C(n, j) (1 - s)^(n - j) s^j`
//!
//! is evaluated by repeatedly blending neighbouring control values,
//! `b_j ← (1 - s) b_j + s b_(j+1)`, until a single value remains.
//!
//! The compensated variant runs the same triangle on a `K × (n + 1)` level table. Row 0 is
//! what double precision computes. Row `F` accumulates the rounding error made by row
//! `F - 1`, captured with error-free transformations. The first column of the table is a
//! `K`-term expansion whose exact sum is accurate to roughly `u^K` times the condition number.

use crate::errors::{CasteljauError, CasteljauResult};
use kfold_eft::{two_prod, two_sum};
use ndarray::{Array2, ArrayView1};
use tracing::{debug, trace};

/// Rejects an empty coefficient list.
pub(crate) fn ensure_coefficients(coeffs: &[f64]) -> CasteljauResult<()> {
    if coeffs.is_empty() {
        debug!("rejected empty coefficient list");
        return Err(CasteljauError::empty_coefficients());
    }
    Ok(())
}

/// Rejects a compensation order of zero.
pub(crate) fn ensure_order(order: usize) -> CasteljauResult<()> {
    if order == 0 {
        debug!("rejected compensation order 0");
        return Err(CasteljauError::InvalidOrder { order });
    }
    Ok(())
}

/// Number of error terms alive at the peak of one compensated update.
///
/// Level 0 leaves three terms; every intermediate level distills them in place, appends
/// the carry's error and then four more, so the peak is `3 + 5 (K - 2) = 5K - 7`.
pub fn error_buffer_capacity(order: usize) -> usize {
    match order {
        0 | 1 => 0,
        k => 5 * k - 7,
    }
}

/// Evaluates a polynomial in Bernstein form with the classical de Casteljau triangle.
///
/// # Arguments
///
/// * `s` - Evaluation parameter; any real value (extrapolation is allowed).
/// * `coeffs` - Bernstein coefficients `b_0, ..., b_n`.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty.
pub fn basic(s: f64, coeffs: &[f64]) -> CasteljauResult<f64> {
    ensure_coefficients(coeffs)?;
    Ok(blend(1.0 - s, s, coeffs))
}

/// Runs the de Casteljau triangle with arbitrary weights `r` and `s`.
///
/// `coeffs` must be non-empty.
pub(crate) fn blend(r: f64, s: f64, coeffs: &[f64]) -> f64 {
    let mut pk = coeffs.to_vec();
    let degree = pk.len().saturating_sub(1);

    for k in 0..degree {
        for j in 0..degree - k {
            pk[j] = r * pk[j] + s * pk[j + 1];
        }
    }

    pk.first().copied().unwrap_or(0.0)
}

/// Evaluates a polynomial in Bernstein form with `order`-fold compensation.
///
/// Returns `order` values whose exact sum approximates `p(s)`; the first is what
/// [`basic`] would return and each subsequent term corrects the previous ones. With
/// `order == 1` the result is exactly `[basic(s, coeffs)]`.
///
/// # Arguments
///
/// * `s` - Evaluation parameter.
/// * `coeffs` - Bernstein coefficients `b_0, ..., b_n`.
/// * `order` - Compensation order `K`, at least 1.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty and
/// `CasteljauError::InvalidOrder` if `order` is zero.
pub fn compensated(s: f64, coeffs: &[f64], order: usize) -> CasteljauResult<Vec<f64>> {
    ensure_coefficients(coeffs)?;
    ensure_order(order)?;
    trace!(degree = coeffs.len() - 1, order, "compensated de Casteljau");

    if order == 1 {
        return Ok(vec![blend(1.0 - s, s, coeffs)]);
    }

    let mut errors = ErrorBuffer::for_order(order);
    Ok(compensated_with(s, coeffs, order, &mut errors))
}

/// Scratch space for the rounding errors of one `(round, index)` update.
#[derive(Debug)]
pub(crate) struct ErrorBuffer {
    terms: Vec<f64>,
    peak: usize,
}

impl ErrorBuffer {
    pub(crate) fn for_order(order: usize) -> Self {
        Self {
            terms: Vec::with_capacity(error_buffer_capacity(order)),
            peak: 0,
        }
    }

    /// Largest number of terms held at once so far.
    #[cfg(test)]
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }

    fn reset(&mut self, initial: &[f64]) {
        self.terms.clear();
        self.terms.extend_from_slice(initial);
        self.peak = self.peak.max(self.terms.len());
    }

    fn push(&mut self, term: f64) {
        self.terms.push(term);
        self.peak = self.peak.max(self.terms.len());
    }

    /// Collapses the buffer into one carry, leaving the rounding errors of that collapse
    /// in place of the consumed terms.
    ///
    /// The carry is `Σ terms + rho * delta_b`. Afterwards the buffer holds one more term than
    /// before, and the exact sum of the buffer plus the carry equals the exact sum of the old
    /// buffer plus `rho * delta_b`. Requires at least two terms.
    fn distill(&mut self, rho: f64, delta_b: f64) -> f64 {
        let n = self.terms.len();
        debug_assert!(n >= 2, "distill needs at least two terms, got {n}");

        let (mut l_hat, err) = two_sum(self.terms[0], self.terms[1]);
        self.terms[0] = err;
        for j in 2..n {
            let (sum, err) = two_sum(l_hat, self.terms[j]);
            self.terms[j - 1] = err;
            l_hat = sum;
        }

        let (product, pi) = two_prod(rho, delta_b);
        self.terms[n - 1] = pi;
        let (carry, sigma) = two_sum(l_hat, product);
        self.push(sigma);
        carry
    }

    /// Plain left-to-right sum of the buffer plus `rho * delta_b`.
    fn fold(&self, rho: f64, delta_b: f64) -> f64 {
        let l_hat = match self.terms.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |acc, term| acc + term),
            None => 0.0,
        };
        l_hat + rho * delta_b
    }
}

/// Compensated recurrence for `order >= 2` on validated input.
pub(crate) fn compensated_with(
    s: f64,
    coeffs: &[f64],
    order: usize,
    errors: &mut ErrorBuffer,
) -> Vec<f64> {
    let degree = coeffs.len() - 1;
    let last = order - 1;
    let (r, rho) = two_sum(1.0, -s);

    let mut bk = Array2::<f64>::zeros((order, degree + 1));
    bk.row_mut(0).assign(&ArrayView1::from(coeffs));

    for k in 0..degree {
        for j in 0..degree - k {
            // Pre-update value; its product with rho is the error of using r for 1 - s.
            let mut delta_b = bk[[0, j]];

            let (p1, pi1) = two_prod(r, bk[[0, j]]);
            let (p2, pi2) = two_prod(s, bk[[0, j + 1]]);
            let (updated, sigma3) = two_sum(p1, p2);
            bk[[0, j]] = updated;
            errors.reset(&[pi1, pi2, sigma3]);

            for level in 1..last {
                let carry = errors.distill(rho, delta_b);
                delta_b = bk[[level, j]];

                let (p, pi) = two_prod(s, bk[[level, j + 1]]);
                errors.push(pi);
                let (partial, sigma) = two_sum(carry, p);
                errors.push(sigma);
                let (p, pi) = two_prod(r, bk[[level, j]]);
                errors.push(pi);
                let (updated, sigma) = two_sum(partial, p);
                errors.push(sigma);
                bk[[level, j]] = updated;
            }

            // The last level absorbs the residual without further compensation.
            let local = errors.fold(rho, delta_b);
            bk[[last, j]] = local + s * bk[[last, j + 1]] + r * bk[[last, j]];
        }
    }

    bk.column(0).to_vec()
}
