//! Value types crossing the public conversion boundary.
//!
//! # Responsibility
//! - Validate caller input into a range-checked `SupportedNumber`.
//! - Hold the immutable (number, words) result of a conversion.
//!
//! # Invariants
//! - A `SupportedNumber` always lies in `[MIN_SUPPORTED_VALUE, MAX_SUPPORTED_VALUE]`.
//! - A `Numeral` can only be produced by a successful conversion.

pub mod number;
pub mod numeral;
