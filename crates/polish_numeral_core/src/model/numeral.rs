//! Conversion result.

use super::number::SupportedNumber;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A number together with its written-out Polish form.
///
/// Fields are private and there is no setter; the only constructor is
/// crate-internal and reached through [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Numeral {
    number: SupportedNumber,
    words: String,
}

impl Numeral {
    pub(crate) fn new(number: SupportedNumber, words: String) -> Self {
        Self { number, words }
    }

    /// The validated input number.
    pub fn number(&self) -> u32 {
        self.number.get()
    }

    /// Space-separated lowercase Polish words.
    pub fn words(&self) -> &str {
        &self.words
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.words)
    }
}

impl From<Numeral> for String {
    fn from(value: Numeral) -> Self {
        value.words
    }
}
