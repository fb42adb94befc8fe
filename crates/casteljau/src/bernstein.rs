// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomials in Bernstein form.

use crate::condition::condition_number;
use crate::de_casteljau::{blend, compensated};
use crate::errors::{CasteljauError, CasteljauResult};
use crate::expansion::Expansion;
use crate::vs::vs;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial of degree `n` represented by its Bernstein coefficients `b_0, ..., b_n`:
///
/// `p(s) = Σ b_j C(n, j) (1 - s)^(n - j) s^j`
///
/// The coefficient list is never empty, so every method can evaluate without
/// re-validating its input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct BernsteinPolynomial {
    coefficients: Vec<f64>,
}

impl fmt::Display for BernsteinPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        let mut binom = 1.0;

        for (j, coeff) in self.coefficients.iter().enumerate() {
            if j > 0 {
                binom = binom * (degree - j + 1) as f64 / j as f64;
            }
            if *coeff == 0.0 {
                continue;
            }

            if !first {
                if *coeff > 0.0 {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }
            } else if *coeff < 0.0 {
                write!(f, "-")?;
            }
            first = false;

            let basis = basis_monomials(degree - j, j);
            let abs_coeff = coeff.abs();
            if basis.is_empty() {
                write!(f, "{abs_coeff}")?;
                continue;
            }

            if abs_coeff != 1.0 {
                write!(f, "{abs_coeff}")?;
            }
            if binom != 1.0 {
                write!(f, "[{binom}{basis}]")?;
            } else {
                write!(f, "{basis}")?;
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

/// Renders `(1 - s)^a s^b`, dropping unit exponents and empty factors.
fn basis_monomials(a: usize, b: usize) -> String {
    let mut out = String::new();
    match a {
        0 => {}
        1 => out.push_str("(1 - s)"),
        _ => out.push_str(&format!("(1 - s)^{a}")),
    }
    match b {
        0 => {}
        1 => out.push('s'),
        _ => out.push_str(&format!("s^{b}")),
    }
    out
}

impl BernsteinPolynomial {
    /// Creates a polynomial from its Bernstein coefficients.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::InvalidDegree` if `coefficients` is empty.
    pub fn new(coefficients: Vec<f64>) -> CasteljauResult<Self> {
        if coefficients.is_empty() {
            return Err(CasteljauError::empty_coefficients());
        }
        Ok(Self { coefficients })
    }

    /// Creates a polynomial of a stated degree.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::InvalidDegree` unless `coefficients.len() == degree + 1`.
    pub fn with_degree(degree: usize, coefficients: Vec<f64>) -> CasteljauResult<Self> {
        if coefficients.len() != degree + 1 {
            return Err(CasteljauError::degree_mismatch(degree, coefficients.len()));
        }
        Self::new(coefficients)
    }

    /// Creates a constant polynomial of degree zero.
    pub fn constant(constant: f64) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the Bernstein coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree `n`.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates at `s` with the plain de Casteljau triangle.
    pub fn evaluate(&self, s: f64) -> f64 {
        blend(1.0 - s, s, &self.coefficients)
    }

    /// Evaluates at `s` with `order`-fold compensation, returning the full expansion.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::InvalidOrder` if `order` is zero.
    pub fn evaluate_compensated(&self, s: f64, order: usize) -> CasteljauResult<Expansion> {
        compensated(s, &self.coefficients, order).map(Expansion::new)
    }

    /// Evaluates at `s` with `order`-fold compensation and rounds the result to one double.
    ///
    /// A zero result keeps the sign of [`BernsteinPolynomial::evaluate`] when that is zero too.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::InvalidOrder` if `order` is zero.
    pub fn evaluate_k(&self, s: f64, order: usize) -> CasteljauResult<f64> {
        let expansion = self.evaluate_compensated(s, order)?;
        let value = expansion.compress(order)?;
        match expansion.leading() {
            // Correction terms come out as +0.0 even when the plain value is -0.0
            Some(plain) if value == 0.0 && plain == 0.0 => Ok(plain),
            _ => Ok(value),
        }
    }

    /// Evaluates at `s` with the linear-time VS method.
    pub fn evaluate_vs(&self, s: f64) -> f64 {
        // Cannot fail: the coefficient list is non-empty.
        vs(s, &self.coefficients).unwrap_or(f64::NAN)
    }

    /// Relative condition number of evaluation at `s`; infinite at a root.
    pub fn condition_number(&self, s: f64) -> f64 {
        condition_number(s, &self.coefficients).unwrap_or(f64::INFINITY)
    }

    /// Encodes the coefficients with bincode.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::Serialization` if encoding fails.
    #[cfg(feature = "bincode")]
    pub fn to_bytes(&self) -> CasteljauResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| CasteljauError::Serialization {
            message: e.to_string(),
        })
    }

    /// Decodes a polynomial written by [`BernsteinPolynomial::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::Serialization` on malformed input or an empty coefficient list.
    #[cfg(feature = "bincode")]
    pub fn from_bytes(bytes: &[u8]) -> CasteljauResult<Self> {
        bincode::deserialize(bytes).map_err(|e| CasteljauError::Serialization {
            message: e.to_string(),
        })
    }
}

impl TryFrom<Vec<f64>> for BernsteinPolynomial {
    type Error = CasteljauError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl From<BernsteinPolynomial> for Vec<f64> {
    fn from(poly: BernsteinPolynomial) -> Self {
        poly.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_creation() {
        let poly = BernsteinPolynomial::new(vec![4.0, 0.0, 0.0, -1.0]).unwrap();
        assert_eq!(poly.degree(), 3);
        assert_eq!(poly.coefficients(), &[4.0, 0.0, 0.0, -1.0]);

        let constant = BernsteinPolynomial::constant(42.0);
        assert_eq!(constant.degree(), 0);
        assert_eq!(constant.evaluate(0.3), 42.0);
    }

    #[test]
    fn test_invalid_degree() {
        assert!(matches!(
            BernsteinPolynomial::new(vec![]),
            Err(CasteljauError::InvalidDegree { .. })
        ));
        assert_eq!(
            BernsteinPolynomial::with_degree(3, vec![1.0, 2.0]),
            Err(CasteljauError::degree_mismatch(3, 2))
        );
        assert!(BernsteinPolynomial::with_degree(1, vec![1.0, 2.0]).is_ok());
        assert!(BernsteinPolynomial::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_polynomial_display() {
        let p1 = BernsteinPolynomial::new(vec![3.0, 2.0]).unwrap();
        assert_eq!(p1.to_string(), "3(1 - s) + 2s");

        let p2 = BernsteinPolynomial::new(vec![3.0, 2.5, 0.0]).unwrap();
        assert_eq!(p2.to_string(), "3(1 - s)^2 + 2.5[2(1 - s)s]");

        let p3 = BernsteinPolynomial::new(vec![4.0, 0.0, 0.0, -1.0]).unwrap();
        assert_eq!(p3.to_string(), "4(1 - s)^3 - s^3");

        let negative = BernsteinPolynomial::new(vec![-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(negative.to_string(), "-(1 - s)^2 + s^2");

        assert_eq!(BernsteinPolynomial::constant(-5.0).to_string(), "-5");
        assert_eq!(BernsteinPolynomial::new(vec![0.0, 0.0]).unwrap().to_string(), "0");
    }

    #[test]
    fn test_evaluation_methods_agree() {
        let poly = BernsteinPolynomial::new(vec![3.0, 2.5, 0.0]).unwrap();
        for s in [-3.0, -1.5, 0.0, 1.5, 3.0] {
            let expected = poly.evaluate(s);
            assert_eq!(poly.evaluate_vs(s), expected);
            assert_eq!(poly.evaluate_k(s, 3).unwrap(), expected);
            assert_eq!(poly.evaluate_compensated(s, 2).unwrap().leading(), Some(expected));
        }
    }

    #[test]
    fn test_signed_zero_agrees_with_plain_evaluation() {
        for coefficients in [vec![-0.0], vec![-0.0, -0.0, -0.0], vec![0.0, -0.0]] {
            let poly = BernsteinPolynomial::new(coefficients).unwrap();
            for s in [0.3, 1.5, -2.0] {
                let plain = poly.evaluate(s);
                for order in 1..=4 {
                    let value = poly.evaluate_k(s, order).unwrap();
                    assert_eq!(value, 0.0);
                    assert_eq!(
                        value.is_sign_negative(),
                        plain.is_sign_negative(),
                        "{poly:?} at s = {s}, order {order}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_condition_number() {
        let poly = BernsteinPolynomial::new(vec![1.0, -1.0]).unwrap();
        assert_eq!(poly.condition_number(0.5), f64::INFINITY);
        assert_eq!(poly.condition_number(0.0), 1.0);
    }

    #[test]
    fn test_invalid_order() {
        let poly = BernsteinPolynomial::new(vec![1.0, 2.0]).unwrap();
        assert_eq!(
            poly.evaluate_compensated(0.5, 0),
            Err(CasteljauError::InvalidOrder { order: 0 })
        );
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;

        #[test]
        fn test_bincode_roundtrip_and_validation() {
            let poly = BernsteinPolynomial::new(vec![4.0, 0.0, 0.0, -1.0]).unwrap();
            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let decoded: BernsteinPolynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(poly, decoded);

            // An empty list is rejected on the way in
            let empty = bincode::serialize(&Vec::<f64>::new()).expect("Failed to serialize");
            assert!(bincode::deserialize::<BernsteinPolynomial>(&empty).is_err());
        }
    }
}
