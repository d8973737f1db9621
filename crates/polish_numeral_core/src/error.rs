//! Conversion error model.
//!
//! # Responsibility
//! - Define the single error type returned by the conversion pipeline.
//! - Separate rejected user input from lexicon/grammar table defects.
//!
//! # Invariants
//! - Every error is terminal for its conversion call; there is no partial result.
//! - `UnsupportedNumber` is the only kind caused by caller input.

use crate::lexicon::cases::GrammaticalNumber;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Failure of a single number-to-words conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input is outside the supported integer range.
    ///
    /// Kept as `i128` so every primitive integer can be reported verbatim.
    UnsupportedNumber { value: i128 },
    /// The encoder asked the lexicon for a value it does not store.
    WordDoesNotExist { value: u64 },
    /// No magnitude noun is configured for this magnitude/class pair.
    CaseDoesNotExist {
        magnitude: u32,
        class: GrammaticalNumber,
    },
}

impl ConversionError {
    /// Returns whether this error signals a lexicon/algorithm mismatch rather
    /// than bad caller input.
    pub fn is_defect(&self) -> bool {
        !matches!(self, Self::UnsupportedNumber { .. })
    }

    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedNumber { .. } => "unsupported_number",
            Self::WordDoesNotExist { .. } => "word_missing",
            Self::CaseDoesNotExist { .. } => "case_missing",
        }
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedNumber { value } => write!(
                f,
                "unsupported number {value}; expected an integer in [{}, {}]",
                crate::MIN_SUPPORTED_VALUE,
                crate::MAX_SUPPORTED_VALUE
            ),
            Self::WordDoesNotExist { value } => {
                write!(f, "lexicon has no word for {value}")
            }
            Self::CaseDoesNotExist { magnitude, class } => write!(
                f,
                "no {class} magnitude noun configured for magnitude {magnitude}"
            ),
        }
    }
}

impl Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::ConversionError;
    use crate::lexicon::cases::GrammaticalNumber;

    #[test]
    fn only_unsupported_number_is_caller_error() {
        assert!(!ConversionError::UnsupportedNumber { value: -1 }.is_defect());
        assert!(ConversionError::WordDoesNotExist { value: 12 }.is_defect());
        assert!(ConversionError::CaseDoesNotExist {
            magnitude: 7,
            class: GrammaticalNumber::GenitivePlural,
        }
        .is_defect());
    }

    #[test]
    fn display_mentions_supported_range() {
        let message = ConversionError::UnsupportedNumber {
            value: 2_147_483_648,
        }
        .to_string();
        assert!(message.contains("2147483648"));
        assert!(message.contains("[0, 2147483647]"));
    }
}
