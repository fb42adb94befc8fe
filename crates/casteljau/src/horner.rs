// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Horner evaluation of polynomials in monomial form, plain and K-fold compensated.
//!
//! Coefficients are in descending order of degree, `a_n, ..., a_1, a_0`.

use crate::de_casteljau::{ensure_coefficients, ensure_order};
use crate::errors::CasteljauResult;
use kfold_eft::{sum_k, two_prod, two_sum};
use tracing::trace;

/// Evaluates `a_n x^n + ... + a_0` with Horner's method.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty.
pub fn basic(x: f64, coeffs: &[f64]) -> CasteljauResult<f64> {
    ensure_coefficients(coeffs)?;
    Ok(horner(x, coeffs))
}

/// Horner's method; the empty polynomial evaluates to zero.
fn horner(x: f64, coeffs: &[f64]) -> f64 {
    match coeffs.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, coeff| acc * x + coeff),
        None => 0.0,
    }
}

/// One error-free Horner pass.
///
/// Returns the rounded value together with the coefficients of two error polynomials of one
/// degree less: the product errors and the sum errors. The exact value of the input
/// polynomial equals the rounded value plus both error polynomials evaluated exactly at `x`.
fn horner_eft(x: f64, coeffs: &[f64]) -> (f64, Vec<f64>, Vec<f64>) {
    let Some((first, rest)) = coeffs.split_first() else {
        return (0.0, Vec::new(), Vec::new());
    };

    let mut p = *first;
    let mut product_errors = Vec::with_capacity(rest.len());
    let mut sum_errors = Vec::with_capacity(rest.len());
    for coeff in rest {
        let (product, pi) = two_prod(p, x);
        let (sum, sigma) = two_sum(product, *coeff);
        p = sum;
        product_errors.push(pi);
        sum_errors.push(sigma);
    }

    (p, product_errors, sum_errors)
}

/// Evaluates a monomial-form polynomial as if in `order`-fold working precision.
///
/// The error-free pass is applied breadth-first for up to `order - 1` levels, which yields
/// at most `2^order - 1` partial values; the error polynomials left at the bottom are
/// evaluated with plain Horner. Error polynomials shrink by one degree per level, so the
/// descent stops after `degree` levels whatever the order. The partial values are then
/// combined with `order`-fold summation.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty and
/// `CasteljauError::InvalidOrder` if `order` is zero.
pub fn compensated(x: f64, coeffs: &[f64], order: usize) -> CasteljauResult<f64> {
    ensure_coefficients(coeffs)?;
    ensure_order(order)?;
    trace!(degree = coeffs.len() - 1, order, "compensated Horner");

    let mut partials = Vec::new();
    let mut frontier = vec![coeffs.to_vec()];
    for _ in 1..order {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::with_capacity(frontier.len() * 2);
        for poly in &frontier {
            let (value, product_errors, sum_errors) = horner_eft(x, poly);
            partials.push(value);
            // A constant leaves empty error polynomials, which only contribute zeros
            next.extend(
                [product_errors, sum_errors]
                    .into_iter()
                    .filter(|errors| !errors.is_empty()),
            );
        }
        frontier = next;
    }
    partials.reserve(frontier.len());
    partials.extend(frontier.iter().map(|poly| horner(x, poly)));

    Ok(sum_k(&partials, order)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CasteljauError;

    /// (x - 1)^n expanded, highest degree first.
    fn shifted_power(n: usize) -> Vec<f64> {
        let mut coeffs = vec![1.0];
        for _ in 0..n {
            let mut next = vec![0.0; coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i] += c;
                next[i + 1] -= c;
            }
            coeffs = next;
        }
        coeffs
    }

    #[test]
    fn test_basic_evaluation() {
        // x^2 + 2x + 3
        assert_eq!(basic(2.0, &[1.0, 2.0, 3.0]).unwrap(), 11.0);
        assert_eq!(basic(-1.0, &[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(basic(10.0, &[5.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_horner_eft_is_error_free_on_exact_data() {
        let (value, product_errors, sum_errors) = horner_eft(2.0, &[1.0, 2.0, 3.0]);
        assert_eq!(value, 11.0);
        assert_eq!(product_errors, vec![0.0, 0.0]);
        assert_eq!(sum_errors, vec![0.0, 0.0]);
    }

    #[test]
    fn test_order_one_is_basic() {
        let coeffs = shifted_power(5);
        for x in [0.9, 1.01, 1.3] {
            assert_eq!(
                compensated(x, &coeffs, 1).unwrap(),
                basic(x, &coeffs).unwrap()
            );
        }
    }

    #[test]
    fn test_compensation_near_multiple_root() {
        let n = 7;
        let coeffs = shifted_power(n);
        let x = 1.0 + 1.0 / 64.0 + 1.0 / 3.0e6;
        let exact = (x - 1.0f64).powi(n as i32);

        let plain = (basic(x, &coeffs).unwrap() - exact).abs() / exact.abs();
        let twofold = (compensated(x, &coeffs, 2).unwrap() - exact).abs() / exact.abs();
        let threefold = (compensated(x, &coeffs, 3).unwrap() - exact).abs() / exact.abs();

        assert!(plain > 1e-6, "plain relative error {plain}");
        assert!(twofold < 1e-8, "twofold relative error {twofold}");
        assert!(threefold < 1e-8, "threefold relative error {threefold}");
        assert!(twofold * 100.0 < plain);
    }

    #[test]
    fn test_large_order_stops_at_degree() {
        // x^2 + 2x + 3 at 2
        assert_eq!(compensated(2.0, &[1.0, 2.0, 3.0], 64).unwrap(), 11.0);
        assert_eq!(compensated(-7.0, &[4.5], 1000).unwrap(), 4.5);

        let coeffs = shifted_power(5);
        let x = 1.0 + 1.0 / 64.0 + 1.0 / 3.0e6;
        let reference = compensated(x, &coeffs, 6).unwrap();
        for order in [7, 12, 40] {
            let value = compensated(x, &coeffs, order).unwrap();
            assert!(
                (value - reference).abs() <= 2.0 * f64::EPSILON * reference.abs(),
                "order {order}: {value} vs {reference}"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            basic(1.0, &[]),
            Err(CasteljauError::InvalidDegree { .. })
        ));
        assert_eq!(
            compensated(1.0, &[1.0, 2.0], 0),
            Err(CasteljauError::InvalidOrder { order: 0 })
        );
    }
}
