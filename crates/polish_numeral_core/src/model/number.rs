//! Range-checked input number.

use crate::error::{ConversionError, ConversionResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Smallest value accepted by the converter.
pub const MIN_SUPPORTED_VALUE: u32 = 0;
/// Largest value accepted by the converter (`i32::MAX`).
pub const MAX_SUPPORTED_VALUE: u32 = 2_147_483_647;

/// Integer validated to lie in `[MIN_SUPPORTED_VALUE, MAX_SUPPORTED_VALUE]`.
///
/// Only integer types convert into this; floats and strings have no
/// conversion and must be parsed by the caller first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SupportedNumber(u32);

impl SupportedNumber {
    /// Validates `value` against the supported range.
    ///
    /// # Errors
    /// - `UnsupportedNumber` when `value` is negative or above `MAX_SUPPORTED_VALUE`.
    pub fn validate(value: i128) -> ConversionResult<Self> {
        if value < i128::from(MIN_SUPPORTED_VALUE) || value > i128::from(MAX_SUPPORTED_VALUE) {
            return Err(ConversionError::UnsupportedNumber { value });
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ConversionError::UnsupportedNumber { value })
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Decimal digits from least to most significant.
    pub fn digits_reversed(self) -> Vec<u8> {
        let mut remaining = self.0;
        let mut digits = Vec::with_capacity(10);
        loop {
            digits.push((remaining % 10) as u8);
            remaining /= 10;
            if remaining == 0 {
                return digits;
            }
        }
    }
}

impl Display for SupportedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SupportedNumber> for u32 {
    fn from(value: SupportedNumber) -> Self {
        value.0
    }
}

macro_rules! impl_try_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for SupportedNumber {
                type Error = ConversionError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    match i128::try_from(value) {
                        Ok(value) => Self::validate(value),
                        // Only `u128` above `i128::MAX` lands here.
                        Err(_) => Err(ConversionError::UnsupportedNumber { value: i128::MAX }),
                    }
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
