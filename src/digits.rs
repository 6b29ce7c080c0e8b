//! Digit sequences and their conversion to integer magnitudes.
//!
//! A digit sequence is a `[u8]` written most-significant digit first. These
//! helpers are shared by both bases; the base tag selects the radix.
//!
//! # Modules
//!
//! - [`validate`]: per-base digit range checks
//! - [`convert`]: digit sequence <-> `BigInt` magnitude

pub mod convert;
pub mod validate;

pub use convert::{from_magnitude, to_magnitude};
pub use validate::validate;

/// The canonical representation of zero.
pub const CANONICAL_ZERO: [u8; 1] = [0];
