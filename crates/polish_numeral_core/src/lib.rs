//! Written-out Polish numerals for non-negative 32-bit integers.
//! This crate owns the lexicon, the grammar rules and the public conversion API.

pub mod encode;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod service;

pub use encode::phrase::WORD_SEPARATOR;
pub use error::{ConversionError, ConversionResult};
pub use lexicon::cases::GrammaticalNumber;
pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingConfig, LoggingError,
};
pub use model::number::{SupportedNumber, MAX_SUPPORTED_VALUE, MIN_SUPPORTED_VALUE};
pub use model::numeral::Numeral;
pub use service::converter::convert;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
