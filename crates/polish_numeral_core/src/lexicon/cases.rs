//! Inflected magnitude nouns.
//!
//! # Invariants
//! - Exact overrides win over suffix derivation.
//! - Derived forms are `word(1000^magnitude)` plus the class suffix.

use super::words;
use crate::error::{ConversionError, ConversionResult};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Grammatical number of a magnitude noun, selected by the quantifying digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    /// "pięć tysięcy", "pięć milionów".
    GenitivePlural,
    /// "dwa tysiące", "dwa miliony".
    NominativePlural,
}

impl GrammaticalNumber {
    /// Class selected by a units digit: 2, 3 and 4 take the nominative
    /// plural, every other digit the genitive plural.
    pub fn for_units_digit(digit: u8) -> Self {
        if digit < 5 && digit != 1 {
            Self::NominativePlural
        } else {
            Self::GenitivePlural
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::GenitivePlural => "ów",
            Self::NominativePlural => "y",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::GenitivePlural => 0,
            Self::NominativePlural => 1,
        }
    }
}

impl Display for GrammaticalNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenitivePlural => f.write_str("genitive plural"),
            Self::NominativePlural => f.write_str("nominative plural"),
        }
    }
}

// Indexed by `GrammaticalNumber::index`.
const CASE_OVERRIDES: &[(u32, [&str; 2])] = &[(1, ["tysięcy", "tysiące"])];

/// Resolves the inflected noun for `magnitude` (1 = thousands, 2 = millions, ...).
///
/// # Errors
/// - `CaseDoesNotExist` for magnitude 0 or a magnitude past the largest noun
///   in the lexicon.
pub fn case_word(magnitude: u32, class: GrammaticalNumber) -> ConversionResult<Cow<'static, str>> {
    let missing = ConversionError::CaseDoesNotExist { magnitude, class };
    if magnitude == 0 {
        return Err(missing);
    }

    if let Some((_, forms)) = CASE_OVERRIDES.iter().find(|(m, _)| *m == magnitude) {
        return Ok(Cow::Borrowed(forms[class.index()]));
    }

    let base = 1000_u64.checked_pow(magnitude).ok_or(missing.clone())?;
    match words::exact(base) {
        Some(word) => Ok(Cow::Owned(format!("{word}{}", class.suffix()))),
        None => Err(missing),
    }
}
