// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact rational reference values.
//!
//! Every finite double is a dyadic rational, so the polynomial value at a double parameter
//! with double coefficients can be computed exactly with big rationals. These routines are
//! slow and only serve to measure the forward error of the floating-point evaluators.

use crate::de_casteljau::ensure_coefficients;
use crate::errors::{CasteljauError, CasteljauResult};
use num::rational::BigRational;
use num_bigint::BigInt;
use num_traits::{Float, One, Signed, ToPrimitive, Zero};

/// Converts a finite double into the rational number it represents.
///
/// # Errors
///
/// Returns `CasteljauError::NonFinite` for NaN and infinities.
pub fn to_rational(x: f64) -> CasteljauResult<BigRational> {
    if !x.is_finite() {
        return Err(CasteljauError::NonFinite { value: x });
    }

    let (mantissa, exponent, sign) = Float::integer_decode(x);
    let mut numer = BigInt::from(mantissa);
    if sign < 0 {
        numer = -numer;
    }

    let shift = exponent.unsigned_abs() as usize;
    if exponent >= 0 {
        Ok(BigRational::from_integer(numer << shift))
    } else {
        Ok(BigRational::new(numer, BigInt::one() << shift))
    }
}

fn to_rationals(values: &[f64]) -> CasteljauResult<Vec<BigRational>> {
    values.iter().map(|v| to_rational(*v)).collect()
}

/// Exact value of the Bernstein polynomial `coeffs` at `s`.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty and
/// `CasteljauError::NonFinite` if any input is not finite.
pub fn de_casteljau(s: f64, coeffs: &[f64]) -> CasteljauResult<BigRational> {
    ensure_coefficients(coeffs)?;
    let s = to_rational(s)?;
    let r = BigRational::one() - &s;

    let mut pk = to_rationals(coeffs)?;
    let degree = pk.len() - 1;
    for k in 0..degree {
        for j in 0..degree - k {
            pk[j] = &r * &pk[j] + &s * &pk[j + 1];
        }
    }

    Ok(pk.swap_remove(0))
}

/// Exact value of the monomial-form polynomial `coeffs` (highest degree first) at `x`.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidDegree` if `coeffs` is empty and
/// `CasteljauError::NonFinite` if any input is not finite.
pub fn horner(x: f64, coeffs: &[f64]) -> CasteljauResult<BigRational> {
    ensure_coefficients(coeffs)?;
    let x = to_rational(x)?;
    let coeffs = to_rationals(coeffs)?;

    Ok(coeffs
        .iter()
        .skip(1)
        .fold(coeffs[0].clone(), |acc, coeff| acc * &x + coeff))
}

/// Exact sum of the terms of an expansion.
///
/// # Errors
///
/// Returns `CasteljauError::NonFinite` if any term is not finite.
pub fn expansion_sum(terms: &[f64]) -> CasteljauResult<BigRational> {
    Ok(to_rationals(terms)?
        .into_iter()
        .fold(BigRational::zero(), |acc, term| acc + term))
}

/// Relative error `|approx - exact| / |exact|`, rounded to a double.
///
/// Zero when both values are zero and `f64::INFINITY` when only `exact` is.
pub fn relative_error(approx: &BigRational, exact: &BigRational) -> f64 {
    if exact.is_zero() {
        return if approx.is_zero() { 0.0 } else { f64::INFINITY };
    }

    ((approx - exact) / exact)
        .abs()
        .to_f64()
        .unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_to_rational() {
        assert_eq!(to_rational(0.75).unwrap(), ratio(3, 4));
        assert_eq!(to_rational(-6.0).unwrap(), ratio(-6, 1));
        assert_eq!(to_rational(0.0).unwrap(), BigRational::zero());
        assert_eq!(
            to_rational(2f64.powi(80)).unwrap(),
            BigRational::from_integer(BigInt::one() << 80usize)
        );
        // Smallest subnormal
        assert_eq!(
            to_rational(f64::from_bits(1)).unwrap(),
            BigRational::new(BigInt::one(), BigInt::one() << 1074usize)
        );
    }

    #[test]
    fn test_to_rational_rejects_non_finite() {
        assert!(matches!(
            to_rational(f64::NAN),
            Err(CasteljauError::NonFinite { .. })
        ));
        assert!(to_rational(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_exact_de_casteljau() {
        let coeffs = [4.0, 0.0, 0.0, -1.0];
        assert_eq!(de_casteljau(-3.0, &coeffs).unwrap(), ratio(283, 1));
        // 4(9/10)^3 - (1/10)^3 is not representable; check against the parameter as stored
        let s = to_rational(0.1).unwrap();
        let r = BigRational::one() - &s;
        let expected = ratio(4, 1) * &r * &r * &r - &s * &s * &s;
        assert_eq!(de_casteljau(0.1, &coeffs).unwrap(), expected);
    }

    #[test]
    fn test_exact_horner() {
        assert_eq!(horner(2.0, &[1.0, 2.0, 3.0]).unwrap(), ratio(11, 1));
        assert_eq!(horner(0.5, &[4.0, 0.0, -1.0]).unwrap(), ratio(0, 1));
    }

    #[test]
    fn test_expansion_sum_keeps_tiny_terms() {
        let tiny = 0.5f64.powi(60);
        let sum = expansion_sum(&[1.0, tiny, -tiny, tiny]).unwrap();
        assert_eq!(sum, ratio(1, 1) + to_rational(tiny).unwrap());
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(&ratio(3, 1), &ratio(4, 1)), 0.25);
        assert_eq!(relative_error(&ratio(0, 1), &ratio(0, 1)), 0.0);
        assert_eq!(relative_error(&ratio(1, 1), &ratio(0, 1)), f64::INFINITY);
    }
}
