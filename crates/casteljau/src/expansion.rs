// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Floating-point expansions produced by compensated evaluation.

use crate::errors::CasteljauResult;
use kfold_eft::sum_k;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unevaluated sum of doubles, most significant term first.
///
/// The exact real sum of the terms is the represented value; each term corrects the
/// rounding left over by the terms before it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expansion {
    terms: Vec<f64>,
}

impl Expansion {
    /// Wraps terms ordered from most to least significant.
    pub fn new(terms: Vec<f64>) -> Self {
        Self { terms }
    }

    /// Returns the terms, most significant first.
    pub fn terms(&self) -> &[f64] {
        &self.terms
    }

    /// Consumes the expansion and returns its terms.
    pub fn into_terms(self) -> Vec<f64> {
        self.terms
    }

    /// Number of terms, i.e. the compensation order that produced it.
    pub fn order(&self) -> usize {
        self.terms.len()
    }

    /// The most significant term; for a compensated evaluation this is the uncompensated value.
    pub fn leading(&self) -> Option<f64> {
        self.terms.first().copied()
    }

    /// Adds the terms with ordinary floating-point addition, least significant first.
    ///
    /// Small corrections accumulate before they meet the leading term, which already recovers
    /// most of the extra accuracy.
    pub fn naive_sum(&self) -> f64 {
        match self.terms.split_last() {
            Some((last, rest)) => rest.iter().rev().fold(*last, |acc, term| acc + term),
            None => 0.0,
        }
    }

    /// Rounds the expansion to a single double using `k`-fold compensated summation.
    ///
    /// # Errors
    ///
    /// Returns `CasteljauError::InvalidOrder` if `k` is zero.
    pub fn compress(&self, k: usize) -> CasteljauResult<f64> {
        compress(&self.terms, k)
    }
}

impl From<Vec<f64>> for Expansion {
    fn from(terms: Vec<f64>) -> Self {
        Self::new(terms)
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{term:e}")?;
            } else {
                write!(f, " + ({term:e})")?;
            }
        }
        Ok(())
    }
}

/// Collapses an expansion into one double with `k`-fold compensated summation.
///
/// # Arguments
///
/// * `expansion` - Terms of the expansion, in any order.
/// * `k` - Compensation order, at least 1.
///
/// # Errors
///
/// Returns `CasteljauError::InvalidOrder` if `k` is zero.
pub fn compress(expansion: &[f64], k: usize) -> CasteljauResult<f64> {
    Ok(sum_k(expansion, k)?)
}
