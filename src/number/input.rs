//! Reading positional numbers from text.
//!
//! Decimal text is parsed as an integer and re-written, so leading zeros and a
//! sign are dropped. Binary text is taken one character at a time and stored
//! verbatim, leading zeros included.

use num_bigint::BigInt;
use tracing::trace;

use crate::base::Base;
use crate::digits;
use crate::error::InputError;

use super::PositionalNumber;

impl PositionalNumber {
    /// Parses `text` into a new number in `base`.
    pub fn parse(base: Base, text: &str) -> Result<Self, InputError> {
        let digits = parse_digits(base, text)?;
        Ok(Self { base, digits })
    }

    /// Replaces the digits with those parsed from `text`, keeping the base.
    /// On error the number is left unchanged.
    pub fn read_from_text(&mut self, text: &str) -> Result<(), InputError> {
        self.digits = parse_digits(self.base, text)?;
        Ok(())
    }
}

fn parse_digits(base: Base, text: &str) -> Result<Vec<u8>, InputError> {
    let malformed = || InputError::MalformedText {
        base,
        text: text.to_string(),
    };

    let parsed = match base {
        Base::Decimal => {
            let numeral = text.trim();
            if !underscores_separate_digits(numeral) {
                return Err(malformed());
            }
            let value: BigInt = numeral.parse().map_err(|_| malformed())?;
            digits::from_magnitude(&value, base)
        }
        Base::Binary => {
            let line = text
                .strip_suffix("\r\n")
                .or_else(|| text.strip_suffix('\n'))
                .unwrap_or(text);
            if line.is_empty() {
                return Err(malformed());
            }
            line.chars()
                .map(|c| match c {
                    '0' => Ok(0),
                    '1' => Ok(1),
                    _ => Err(malformed()),
                })
                .collect::<Result<Vec<u8>, _>>()?
        }
    };

    trace!(%base, text, digits = ?parsed, "parsed positional input");
    Ok(parsed)
}

/// Every `_` must sit between two ASCII digits (`1_000`), never at an end or doubled.
fn underscores_separate_digits(numeral: &str) -> bool {
    let bytes = numeral.as_bytes();
    bytes.iter().enumerate().all(|(index, &byte)| {
        byte != b'_'
            || (index > 0
                && bytes[index - 1].is_ascii_digit()
                && bytes.get(index + 1).is_some_and(u8::is_ascii_digit))
    })
}
