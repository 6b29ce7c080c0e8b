//! Conversion between digit sequences and integer magnitudes.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::base::Base;

/// Evaluates a most-significant-first digit sequence in `base`.
///
/// Leading zeros do not change the value. The digits are assumed to have been
/// validated; an empty sequence evaluates to zero.
pub fn to_magnitude(digits: &[u8], base: Base) -> BigInt {
    let radix = BigUint::from(base.radix());
    let magnitude = digits
        .iter()
        .fold(BigUint::zero(), |acc, &digit| acc * &radix + digit);
    BigInt::from(magnitude)
}

/// Writes `value` as a most-significant-first digit sequence in `base`.
///
/// The sign of `value` is discarded; only its absolute value is written.
/// Zero becomes `[0]` and every other value has no leading zeros.
pub fn from_magnitude(value: &BigInt, base: Base) -> Vec<u8> {
    if value.is_zero() {
        return super::CANONICAL_ZERO.to_vec();
    }
    value.magnitude().to_radix_be(u32::from(base.radix()))
}
