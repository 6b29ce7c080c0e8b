//! Decimal and binary numbers stored as positional digit sequences.
//!
//! Both variants share one layout: a [`Base`] tag and the digits written in that
//! base, most-significant first. The tag never changes after construction; the
//! digits can be replaced wholesale and are re-validated every time.

mod arithmetic;
mod display;
mod input;

use num_bigint::BigInt;

use crate::base::Base;
use crate::digits::{self, CANONICAL_ZERO};
use crate::error::DigitError;

pub use display::describe;

/// A non-negative whole number written as digits in a fixed base.
///
/// Equality is structural: `Decimal([0, 1])` and `Decimal([1])` have the same
/// magnitude but are not equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PositionalNumber {
    base: Base,
    digits: Vec<u8>,
}

impl PositionalNumber {
    /// Creates a number from explicit digits, rejecting any digit outside the base.
    pub fn new(base: Base, digits: Vec<u8>) -> Result<Self, DigitError> {
        digits::validate(&digits, base)?;
        Ok(Self { base, digits })
    }

    /// Creates a base-10 number; every digit must be in `0..=9`.
    pub fn decimal(digits: Vec<u8>) -> Result<Self, DigitError> {
        Self::new(Base::Decimal, digits)
    }

    /// Creates a base-2 number; every digit must be `0` or `1`.
    pub fn binary(digits: Vec<u8>) -> Result<Self, DigitError> {
        Self::new(Base::Binary, digits)
    }

    /// Canonical zero (`[0]`) in the given base.
    pub fn zero(base: Base) -> Self {
        Self {
            base,
            digits: CANONICAL_ZERO.to_vec(),
        }
    }

    /// Builds a number holding the normalized digits of `value`; the sign is dropped.
    pub fn from_magnitude(base: Base, value: &BigInt) -> Self {
        Self {
            base,
            digits: digits::from_magnitude(value, base),
        }
    }

    /// The base tag fixed at construction.
    pub fn base(&self) -> Base {
        self.base
    }

    /// The digits exactly as stored, including any leading zeros.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The value the digits denote.
    pub fn magnitude(&self) -> BigInt {
        digits::to_magnitude(&self.digits, self.base)
    }

    /// Whether the magnitude is zero, however many zero digits are stored.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&digit| digit == 0)
    }

    /// Replaces the digits wholesale. On error the number is left unchanged.
    pub fn replace_digits(&mut self, digits: Vec<u8>) -> Result<(), DigitError> {
        digits::validate(&digits, self.base)?;
        self.digits = digits;
        Ok(())
    }
}

impl Default for PositionalNumber {
    fn default() -> Self {
        Self::zero(Base::Decimal)
    }
}
