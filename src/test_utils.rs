//! Shared test helpers.

#![allow(clippy::expect_used)]

use crate::number::PositionalNumber;

/// Creates a decimal number from digits, panicking if any digit is invalid.
///
/// # Examples
/// ```ignore
/// let value = dec(&[1, 2, 3]); // 123
/// ```
pub fn dec(digits: &[u8]) -> PositionalNumber {
    PositionalNumber::decimal(digits.to_vec()).expect("test digits should be valid decimal")
}

/// Creates a binary number from bits, panicking if any bit is invalid.
///
/// # Examples
/// ```ignore
/// let ten = bin(&[1, 0, 1, 0]);
/// ```
pub fn bin(bits: &[u8]) -> PositionalNumber {
    PositionalNumber::binary(bits.to_vec()).expect("test bits should be valid binary")
}
