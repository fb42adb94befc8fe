// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Error-Free Transformations
//!
//! Building blocks for compensated floating-point algorithms over `f64`.
//!
//! An error-free transformation (EFT) returns both the rounded result of an operation and the
//! exact residual discarded by rounding, so that the pair recombines (in exact arithmetic) to
//! the true mathematical result.
//!
//! ## Features
//!
//! - `two_sum`: Knuth's six-operation sum, valid for operands in any order of magnitude.
//! - `two_prod`: fused multiply-add product.
//! - `two_prod_split`: Dekker's product via Veltkamp splitting, for targets without FMA.
//! - `vec_sum` / `sum_k`: distillation passes and the K-fold summation driver, which collapse an
//!   expansion into a single double with K-fold working precision.

pub mod eft;
pub mod errors;
pub mod sum;

pub use eft::{split, two_prod, two_prod_split, two_sum};
pub use errors::{EftError, EftResult};
pub use sum::{sum_k, vec_sum};
