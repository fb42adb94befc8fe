// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for compensated summation.

use thiserror::Error;

/// Errors that can occur in the summation drivers.
///
/// The transformations themselves are total; only the order parameter of the
/// K-fold drivers can be invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EftError {
    /// Compensation order below one
    #[error("Invalid compensation order: {order} (must be at least 1)")]
    InvalidOrder { order: usize },
}

/// Result type alias for summation operations
pub type EftResult<T> = Result<T, EftError>;
