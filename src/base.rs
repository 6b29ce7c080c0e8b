//! Base tags for positional numbers.

use std::fmt;

/// The positional base a digit sequence is written in.
///
/// The tag is fixed for the lifetime of a [`PositionalNumber`](crate::PositionalNumber)
/// and selects the digit range, the conversion radix, and the rendering rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    /// Base 10, digits `0..=9`.
    Decimal,
    /// Base 2, digits `0` and `1`.
    Binary,
}

impl Base {
    /// Number of distinct digits in this base.
    pub const fn radix(self) -> u8 {
        match self {
            Self::Decimal => 10,
            Self::Binary => 2,
        }
    }

    /// Largest legal digit.
    pub const fn max_digit(self) -> u8 {
        self.radix() - 1
    }

    /// Whether `digit` is legal in this base.
    pub const fn is_valid_digit(self, digit: u8) -> bool {
        digit < self.radix()
    }

    /// Lowercase name used in messages ("decimal", "binary").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
        }
    }

    /// Type-style tag used by the formal rendering (`Decimal([1, 2])`).
    pub(crate) const fn tag(self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::Binary => "Binary",
        }
    }

    /// Human-readable legal digit range.
    pub(crate) const fn range_description(self) -> &'static str {
        match self {
            Self::Decimal => "0-9",
            Self::Binary => "0 or 1",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
