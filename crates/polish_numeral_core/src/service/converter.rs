//! Conversion use-case.
//!
//! # Responsibility
//! - Orchestrate validation, digit-group encoding and phrase assembly.
//! - Emit one `convert` log event per call.
//!
//! # Invariants
//! - A call either returns a complete `Numeral` or an error, never a partial phrase.
//! - No state survives between calls.

use crate::encode::{digit_groups, phrase};
use crate::error::{ConversionError, ConversionResult};
use crate::model::number::SupportedNumber;
use crate::model::numeral::Numeral;
use log::{debug, error, warn};

/// Converts an integer into its written-out Polish form.
///
/// Accepts any primitive integer type; the value must lie in
/// `[MIN_SUPPORTED_VALUE, MAX_SUPPORTED_VALUE]`.
///
/// # Errors
/// - `UnsupportedNumber` for out-of-range input.
/// - `WordDoesNotExist` / `CaseDoesNotExist` when the lexicon tables are
///   incomplete; these are logged at `error` level.
pub fn convert<N>(value: N) -> ConversionResult<Numeral>
where
    N: TryInto<SupportedNumber, Error = ConversionError>,
{
    let number = match value.try_into() {
        Ok(number) => number,
        Err(err) => {
            warn!(
                "event=convert module=converter status=rejected error_code={} error={}",
                err.code(),
                err
            );
            return Err(err);
        }
    };

    match convert_supported(number) {
        Ok(numeral) => {
            debug!(
                "event=convert module=converter status=ok number={} words_len={}",
                numeral.number(),
                numeral.words().len()
            );
            Ok(numeral)
        }
        Err(err) => {
            error!(
                "event=convert module=converter status=error number={} error_code={} error={}",
                number,
                err.code(),
                err
            );
            Err(err)
        }
    }
}

fn convert_supported(number: SupportedNumber) -> ConversionResult<Numeral> {
    let tokens = digit_groups::encode(number)?;
    Ok(Numeral::new(number, phrase::assemble(tokens)))
}
