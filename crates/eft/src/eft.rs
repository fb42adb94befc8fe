// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error-free transformations for addition and multiplication.

/// Veltkamp splitting factor for binary64, `2^27 + 1`.
const SPLITTER: f64 = 134_217_729.0;

/// Computes `a + b` together with its rounding error.
///
/// Returns `(sum, err)` where `sum = fl(a + b)` and `a + b == sum + err` holds exactly.
/// Uses Knuth's branch-free form, so no ordering of `|a|` and `|b|` is required.
///
/// # Arguments
///
/// * `a` - First addend.
/// * `b` - Second addend.
///
/// # Returns
///
/// The rounded sum and the exact residual. Non-finite inputs propagate per IEEE-754.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let sum = a + b;
    let almost_b = sum - a;
    let err = (a - (sum - almost_b)) + (b - almost_b);
    (sum, err)
}

/// Computes `a * b` together with its rounding error using a fused multiply-add.
///
/// Returns `(product, err)` where `a * b == product + err` holds exactly, provided the
/// product neither overflows nor lands in the range where `err` would underflow.
#[inline]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let product = a * b;
    let err = a.mul_add(b, -product);
    (product, err)
}

/// Splits `a` into a high and a low part with `a == hi + lo`, each fitting in 26 bits.
///
/// Overflows for `|a|` above roughly `2^996`.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    let scaled = a * SPLITTER;
    let hi = scaled - (scaled - a);
    let lo = a - hi;
    (hi, lo)
}

/// Dekker's multiplication EFT, built on [`split`] instead of a fused multiply-add.
///
/// Yields the same pair as [`two_prod`] whenever neither operand is large enough to overflow
/// the split.
#[inline]
pub fn two_prod_split(a: f64, b: f64) -> (f64, f64) {
    let product = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err = a_lo * b_lo - (((product - a_hi * b_hi) - a_lo * b_hi) - a_hi * b_lo);
    (product, err)
}
