//! Digit-group encoder.
//!
//! Digits are read from least to most significant. Each run of three digits
//! (units, tens, hundreds) forms one magnitude group; a group that emits any
//! word is prefixed with its inflected magnitude noun exactly once.
//!
//! # Invariants
//! - An all-zero group emits nothing, not even its magnitude noun.
//! - Teen composition replaces the group's units word and the noun it selected.

use super::WordToken;
use crate::error::ConversionResult;
use crate::lexicon::cases::{case_word, GrammaticalNumber};
use crate::lexicon::words::{
    self, HIGH_HUNDREDS_SUFFIX, LOW_HUNDREDS_SUFFIX, TEEN_SUFFIX, TENS_SUFFIX,
};
use crate::model::number::SupportedNumber;
use std::borrow::Cow;

/// Encodes `number` into word tokens, least significant group first.
///
/// # Errors
/// - `WordDoesNotExist` / `CaseDoesNotExist` when the lexicon tables do not
///   cover a digit combination; both indicate a table defect.
pub fn encode(number: SupportedNumber) -> ConversionResult<Vec<WordToken>> {
    if let Some(word) = words::exact(u64::from(number.get())) {
        return Ok(vec![Cow::Borrowed(word)]);
    }

    let digits = number.digits_reversed();
    let sole_digit = digits.len() == 1;
    let mut tokens = Vec::with_capacity(digits.len() * 2);
    let mut group = GroupBuffer::new(0);

    for (index, &digit) in digits.iter().enumerate() {
        let position = index % 3;
        let magnitude = (index / 3) as u32;
        if magnitude != group.magnitude {
            group.flush_into(&mut tokens);
            group = GroupBuffer::new(magnitude);
        }

        match (position, digit) {
            (0, 0) if sole_digit => group.push_units(digit)?,
            (_, 0) => {}
            (0, _) => group.push_units(digit)?,
            (1, 1) => group.push_teen(digits[index - 1])?,
            (1, _) => group.push_tens(digit)?,
            _ => group.push_hundreds(digit)?,
        }
    }
    group.flush_into(&mut tokens);

    Ok(tokens)
}

/// Tokens of one magnitude group, in production order.
struct GroupBuffer {
    magnitude: u32,
    tokens: Vec<WordToken>,
}

impl GroupBuffer {
    fn new(magnitude: u32) -> Self {
        Self {
            magnitude,
            tokens: Vec::with_capacity(4),
        }
    }

    fn push(&mut self, word: WordToken, class: GrammaticalNumber) -> ConversionResult<()> {
        if self.magnitude > 0 && self.tokens.is_empty() {
            self.tokens.push(case_word(self.magnitude, class)?);
        }
        self.tokens.push(word);
        Ok(())
    }

    fn push_units(&mut self, digit: u8) -> ConversionResult<()> {
        let word = words::word_for(u64::from(digit))?;
        self.push(
            Cow::Borrowed(word),
            GrammaticalNumber::for_units_digit(digit),
        )
    }

    fn push_teen(&mut self, units: u8) -> ConversionResult<()> {
        // Units are always the first digit of a group, so this drops exactly
        // the units word and the noun it selected.
        self.tokens.clear();
        let word = derive_or_exact(10 + u64::from(units), u64::from(units), TEEN_SUFFIX)?;
        self.push(word, GrammaticalNumber::GenitivePlural)
    }

    fn push_tens(&mut self, digit: u8) -> ConversionResult<()> {
        let word = derive_or_exact(u64::from(digit) * 10, u64::from(digit), TENS_SUFFIX)?;
        self.push(word, GrammaticalNumber::GenitivePlural)
    }

    fn push_hundreds(&mut self, digit: u8) -> ConversionResult<()> {
        let suffix = if digit < 5 {
            LOW_HUNDREDS_SUFFIX
        } else {
            HIGH_HUNDREDS_SUFFIX
        };
        let word = derive_or_exact(u64::from(digit) * 100, u64::from(digit), suffix)?;
        self.push(word, GrammaticalNumber::GenitivePlural)
    }

    fn flush_into(&mut self, tokens: &mut Vec<WordToken>) {
        tokens.append(&mut self.tokens);
    }
}

/// Exact word for `value` when stored, otherwise `word(stem) + suffix`.
fn derive_or_exact(value: u64, stem: u64, suffix: &str) -> ConversionResult<WordToken> {
    match words::exact(value) {
        Some(word) => Ok(Cow::Borrowed(word)),
        None => Ok(Cow::Owned(format!("{}{suffix}", words::word_for(stem)?))),
    }
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::model::number::SupportedNumber;

    fn tokens(value: u32) -> Vec<String> {
        encode(SupportedNumber::try_from(value).unwrap())
            .unwrap()
            .into_iter()
            .map(|token| token.into_owned())
            .collect()
    }

    #[test]
    fn exact_entries_take_fast_path() {
        assert_eq!(tokens(0), vec!["zero"]);
        assert_eq!(tokens(1_000), vec!["tysiąc"]);
        assert_eq!(tokens(1_000_000_000), vec!["miliard"]);
    }

    #[test]
    fn tokens_are_least_significant_first() {
        assert_eq!(tokens(123), vec!["trzy", "dwadzieścia", "sto"]);
    }

    #[test]
    fn group_noun_precedes_group_words_in_production_order() {
        assert_eq!(tokens(2_001), vec!["jeden", "tysiące", "dwa"]);
    }

    #[test]
    fn teen_replaces_units_word_and_its_noun() {
        assert_eq!(tokens(12_000), vec!["tysięcy", "dwanaście"]);
        assert_eq!(tokens(13_000_000), vec!["milionów", "trzynaście"]);
    }

    #[test]
    fn tens_without_units_still_carry_group_noun() {
        assert_eq!(tokens(20_001), vec!["jeden", "tysięcy", "dwadzieścia"]);
    }

    #[test]
    fn zero_groups_emit_nothing() {
        assert_eq!(tokens(1_000_005), vec!["pięć", "milionów", "jeden"]);
    }
}
