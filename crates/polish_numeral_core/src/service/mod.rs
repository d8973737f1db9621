//! Core use-case services.
//!
//! # Responsibility
//! - Expose the conversion entry point on top of the model, lexicon and encoder.
//! - Keep callers decoupled from digit-group details.

pub mod converter;
