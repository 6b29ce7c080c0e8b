//! Digit range validation.

use crate::base::Base;
use crate::error::DigitError;

/// Checks that `digits` is a legal, non-empty digit sequence for `base`.
///
/// Leading zeros are accepted; only the range of each digit is checked.
/// The first offending digit is reported along with its position.
pub fn validate(digits: &[u8], base: Base) -> Result<(), DigitError> {
    if digits.is_empty() {
        return Err(DigitError::Empty { base });
    }

    match digits
        .iter()
        .enumerate()
        .find(|(_, digit)| !base.is_valid_digit(**digit))
    {
        Some((position, &digit)) => Err(DigitError::OutOfRange {
            base,
            digit,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_decimal_digit() {
        let digits: Vec<u8> = (0..=9).collect();
        assert_eq!(validate(&digits, Base::Decimal), Ok(()));
    }

    #[test]
    fn accepts_leading_zeros() {
        assert_eq!(validate(&[0, 1, 2], Base::Decimal), Ok(()));
        assert_eq!(validate(&[0, 0, 1], Base::Binary), Ok(()));
    }

    #[test]
    fn rejects_decimal_ten() {
        assert_eq!(
            validate(&[10], Base::Decimal),
            Err(DigitError::OutOfRange {
                base: Base::Decimal,
                digit: 10,
                position: 0,
            })
        );
    }

    #[test]
    fn rejects_binary_two_and_reports_first_offender() {
        assert_eq!(
            validate(&[1, 2, 3], Base::Binary),
            Err(DigitError::OutOfRange {
                base: Base::Binary,
                digit: 2,
                position: 1,
            })
        );
    }

    #[test]
    fn decimal_digits_are_not_binary_digits() {
        assert!(validate(&[1, 2, 3], Base::Decimal).is_ok());
        assert!(validate(&[1, 2, 3], Base::Binary).is_err());
    }

    #[test]
    fn rejects_empty_sequence() {
        assert_eq!(
            validate(&[], Base::Decimal),
            Err(DigitError::Empty { base: Base::Decimal })
        );
        assert_eq!(
            validate(&[], Base::Binary),
            Err(DigitError::Empty { base: Base::Binary })
        );
    }
}
