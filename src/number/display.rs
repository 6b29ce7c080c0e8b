//! Text renderings of positional numbers.
//!
//! - Informal (`Display`): decimal renders its value, so leading zeros vanish;
//!   binary joins its stored bits, so leading zeros stay.
//! - Formal (`Debug`): the base tag and the literal digits, e.g. `Binary([0, 1])`.
//! - Summary: labelled lines for display by a front end.

use std::fmt::{self, Write};

use crate::base::Base;

use super::PositionalNumber;

impl PositionalNumber {
    /// The formal rendering: base tag plus the digits as stored.
    pub fn debug_string(&self) -> String {
        format!("{self:?}")
    }

    /// Labelled lines describing the number: the numeral, its value, and its raw digits.
    pub fn write_summary(&self) -> Vec<String> {
        match self.base {
            Base::Decimal => vec![
                format!("Decimal number: {self}"),
                format!("Digit array: {:?}", self.digits),
            ],
            Base::Binary => vec![
                format!("Binary number: {self}"),
                format!("Decimal value: {}", self.magnitude()),
                format!("Bit array: {:?}", self.digits),
            ],
        }
    }
}

impl fmt::Display for PositionalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base {
            Base::Decimal => write!(f, "{}", self.magnitude()),
            Base::Binary => self
                .digits
                .iter()
                .try_for_each(|&bit| f.write_char(if bit == 0 { '0' } else { '1' })),
        }
    }
}

impl fmt::Debug for PositionalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.base.tag(), self.digits)
    }
}

/// Renders any positional number through the shared surface, whichever base it uses.
pub fn describe(number: &PositionalNumber) -> Vec<String> {
    let mut lines = vec![
        "Virtual call:".to_string(),
        format!("String form: {number}"),
        format!("Formal form: {}", number.debug_string()),
    ];
    lines.extend(number.write_summary());
    lines
}
