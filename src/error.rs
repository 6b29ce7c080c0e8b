//! Error types for positional numbers.
//!
//! Each stage reports its own error type:
//! - `DigitError`: a digit sequence failed validation at construction or replacement
//! - `ArithError`: an arithmetic operation could not be performed
//! - `InputError`: text could not be parsed into digits for a base
//!
//! `PositionalError` wraps all three for callers that mix stages.

use std::fmt;

use crate::base::Base;

/// Errors raised when a digit sequence is not valid for its base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigitError {
    /// The sequence has no digits; zero must be written as `[0]`.
    Empty { base: Base },
    /// A digit lies outside `0..base`.
    OutOfRange {
        base: Base,
        digit: u8,
        position: usize,
    },
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { base } => {
                write!(f, "{base} digit sequence must contain at least one digit")
            }
            Self::OutOfRange {
                base,
                digit,
                position,
            } => write!(
                f,
                "{base} digits must be in the range {} (found {digit} at position {position})",
                base.range_description()
            ),
        }
    }
}

impl std::error::Error for DigitError {}

/// Errors raised by arithmetic between positional numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArithError {
    /// The operands carry different base tags.
    TypeMismatch { lhs: Base, rhs: Base },
    /// The divisor's magnitude is zero.
    DivisionByZero,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { lhs, rhs } => {
                write!(f, "cannot combine a {lhs} number with a {rhs} number")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithError {}

/// Errors raised when reading a number from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The text is not a valid numeral for the base.
    MalformedText { base: Base, text: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedText { base, text } => {
                write!(f, "malformed {base} input: {text:?}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Any error produced by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositionalError {
    Digit(DigitError),
    Arith(ArithError),
    Input(InputError),
}

impl fmt::Display for PositionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(err) => write!(f, "{err}"),
            Self::Arith(err) => write!(f, "{err}"),
            Self::Input(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PositionalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Digit(err) => Some(err),
            Self::Arith(err) => Some(err),
            Self::Input(err) => Some(err),
        }
    }
}

impl From<DigitError> for PositionalError {
    fn from(error: DigitError) -> Self {
        Self::Digit(error)
    }
}

impl From<ArithError> for PositionalError {
    fn from(error: ArithError) -> Self {
        Self::Arith(error)
    }
}

impl From<InputError> for PositionalError {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}
