//! Static Polish vocabulary used by the encoder.
//!
//! # Responsibility
//! - Map exact integer values to their Polish words.
//! - Resolve inflected magnitude nouns ("tysiąc", "milion", ...).
//!
//! # Invariants
//! - Tables are initialised once per process and never mutated.
//! - Words are stored with Polish diacritics verbatim.

pub mod cases;
pub mod words;
