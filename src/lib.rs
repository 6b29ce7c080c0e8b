//! Decimal and binary whole numbers stored as positional digit sequences.
//!
//! A [`PositionalNumber`] holds a [`Base`] tag and a most-significant-first
//! sequence of digits, validated when the number is built and whenever its digits
//! are replaced. Arithmetic evaluates both operands to [`BigInt`](num_bigint::BigInt)
//! magnitudes, combines them, and writes the result back in the same base.
//!
//! ```
//! use positional::PositionalNumber;
//!
//! let lhs = PositionalNumber::binary(vec![1, 0, 1, 0])?;
//! let rhs = PositionalNumber::binary(vec![1, 1, 0])?;
//! assert_eq!(lhs.add(&rhs)?.to_string(), "10000");
//! # Ok::<(), positional::PositionalError>(())
//! ```

#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

mod base;
pub mod digits;
mod error;
mod number;
#[cfg(test)]
mod test_utils;

pub use base::Base;
pub use error::{ArithError, DigitError, InputError, PositionalError};
pub use number::{PositionalNumber, describe};
