// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Compensated summation by repeated distillation.

use crate::eft::two_sum;
use crate::errors::{EftError, EftResult};
use tracing::debug;

/// Runs one distillation pass over `terms` in place.
///
/// Each running sum moves one slot to the right while the rounding error it produced is left
/// behind in the earlier slot. The exact sum of the slice is unchanged and the last slot
/// ends up holding the ordinary recursive sum.
///
/// # Arguments
///
/// * `terms` - The values to distill; any length, including zero.
pub fn vec_sum(terms: &mut [f64]) {
    for i in 1..terms.len() {
        let (sum, err) = two_sum(terms[i], terms[i - 1]);
        terms[i] = sum;
        terms[i - 1] = err;
    }
}

/// Sums `terms` as if computed in `k`-fold working precision, then rounds to a double.
///
/// Applies [`vec_sum`] `k - 1` times to a private copy of `terms` and adds the result left to
/// right. With `k = 1` this is plain recursive summation. When every term is zero the result
/// carries the sign plain recursive summation gives, so `-0.0` terms add up to `-0.0`.
///
/// # Arguments
///
/// * `terms` - The values to add.
/// * `k` - Compensation order, at least 1.
///
/// # Errors
///
/// Returns `EftError::InvalidOrder` if `k` is zero.
pub fn sum_k(terms: &[f64], k: usize) -> EftResult<f64> {
    if k == 0 {
        debug!(len = terms.len(), "rejected summation order 0");
        return Err(EftError::InvalidOrder { order: k });
    }

    // Distillation turns -0.0 + -0.0 into +0.0 residuals
    if terms.iter().all(|term| *term == 0.0) {
        return Ok(recursive_sum(terms));
    }

    let mut workspace = terms.to_vec();
    for _ in 1..k {
        vec_sum(&mut workspace);
    }

    Ok(recursive_sum(&workspace))
}

/// Left-to-right sum seeded with the first term; the empty sum is `0.0`.
fn recursive_sum(terms: &[f64]) -> f64 {
    match terms.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, term| acc + term),
        None => 0.0,
    }
}
