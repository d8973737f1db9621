//! Number-to-token encoding and phrase assembly.
//!
//! # Responsibility
//! - Walk decimal digits right to left and emit inflected word tokens.
//! - Turn the token list into the final space-separated phrase.
//!
//! # Invariants
//! - Tokens are produced least significant group first.
//! - Reordering happens only in `phrase::assemble`.

use std::borrow::Cow;

pub mod digit_groups;
pub mod phrase;

/// Word fragment already in final surface form.
pub type WordToken = Cow<'static, str>;
