//! Phrase assembly.

use super::WordToken;

/// Separator placed between words of a phrase.
pub const WORD_SEPARATOR: &str = " ";

/// Reverses tokens produced least-significant-first and joins them.
pub fn assemble(mut tokens: Vec<WordToken>) -> String {
    tokens.reverse();
    tokens.join(WORD_SEPARATOR)
}
