// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial evaluation.

use kfold_eft::EftError;
use thiserror::Error;

/// Errors that can occur during polynomial evaluation.
///
/// Every check runs before any arithmetic, so a failed call never leaves
/// partially computed state behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CasteljauError {
    /// Empty coefficient list, or a length that disagrees with the stated degree
    #[error("Invalid degree: {message}")]
    InvalidDegree { message: String },

    /// Compensation order below one
    #[error("Invalid compensation order: {order} (must be at least 1)")]
    InvalidOrder { order: usize },

    /// NaN or infinity handed to the exact rational oracle
    #[error("Non-finite value {value} has no exact rational form")]
    NonFinite { value: f64 },

    /// Binary encoding or decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Result type alias for evaluation operations
pub type CasteljauResult<T> = Result<T, CasteljauError>;

impl From<EftError> for CasteljauError {
    fn from(err: EftError) -> Self {
        match err {
            EftError::InvalidOrder { order } => CasteljauError::InvalidOrder { order },
        }
    }
}

impl CasteljauError {
    /// Error for an empty coefficient list.
    pub fn empty_coefficients() -> Self {
        CasteljauError::InvalidDegree {
            message: "coefficient list must not be empty".to_string(),
        }
    }

    /// Error for a coefficient list whose length does not match `degree + 1`.
    pub fn degree_mismatch(degree: usize, len: usize) -> Self {
        CasteljauError::InvalidDegree {
            message: format!(
                "degree {} requires {} coefficients, got {}",
                degree,
                degree + 1,
                len
            ),
        }
    }
}
