#![allow(dead_code)]

use positional::{Base, PositionalNumber};
use rand::Rng;
use rand::rngs::StdRng;

/// Random digit sequence of `len` digits in `base` with a nonzero leading digit.
pub fn random_digits(rng: &mut StdRng, base: Base, len: usize) -> Vec<u8> {
    let mut digits: Vec<u8> = (0..len).map(|_| rng.gen_range(0..base.radix())).collect();
    if let Some(first) = digits.first_mut() {
        *first = rng.gen_range(1..base.radix());
    }
    digits
}

/// Random number of `len` digits, panicking if generation produced invalid digits.
pub fn random_number(rng: &mut StdRng, base: Base, len: usize) -> PositionalNumber {
    PositionalNumber::new(base, random_digits(rng, base, len))
        .expect("generated digits should be valid")
}

/// Renders digits as text, one character per digit.
pub fn digits_to_text(digits: &[u8]) -> String {
    digits.iter().map(|digit| char::from(b'0' + digit)).collect()
}
