//! Exact-value word table and derivation suffixes.

use crate::error::{ConversionError, ConversionResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Appended to a units word to form 12, 13, 17 and 18.
pub const TEEN_SUFFIX: &str = "naście";
/// Appended to a units word to form 50..90.
pub const TENS_SUFFIX: &str = "dziesiąt";
/// Appended to a units word to form 300 and 400.
pub const LOW_HUNDREDS_SUFFIX: &str = "sta";
/// Appended to a units word to form 500..900.
pub const HIGH_HUNDREDS_SUFFIX: &str = "set";

// 12, 13, 17, 18 and 50..90, 300..900 are derived from suffixes.
const WORD_ENTRIES: &[(u64, &str)] = &[
    (0, "zero"),
    (1, "jeden"),
    (2, "dwa"),
    (3, "trzy"),
    (4, "cztery"),
    (5, "pięć"),
    (6, "sześć"),
    (7, "siedem"),
    (8, "osiem"),
    (9, "dziewięć"),
    (10, "dziesięć"),
    (11, "jedenaście"),
    (14, "czternaście"),
    (15, "piętnaście"),
    (16, "szesnaście"),
    (19, "dziewiętnaście"),
    (20, "dwadzieścia"),
    (30, "trzydzieści"),
    (40, "czterdzieści"),
    (100, "sto"),
    (200, "dwieście"),
    (1_000, "tysiąc"),
    (1_000_000, "milion"),
    (1_000_000_000, "miliard"),
    (1_000_000_000_000, "bilion"),
    (1_000_000_000_000_000, "biliard"),
    (1_000_000_000_000_000_000, "trylion"),
];

static WORDS: Lazy<HashMap<u64, &'static str>> =
    Lazy::new(|| WORD_ENTRIES.iter().copied().collect());

/// Returns the stored word for `value`, or `None` when the value must be
/// derived.
pub fn exact(value: u64) -> Option<&'static str> {
    WORDS.get(&value).copied()
}

/// Returns the stored word for `value`.
///
/// # Errors
/// - `WordDoesNotExist` when the table has no entry; callers only ask for
///   values they expect to be stored, so this signals a defect.
pub fn word_for(value: u64) -> ConversionResult<&'static str> {
    exact(value).ok_or(ConversionError::WordDoesNotExist { value })
}
