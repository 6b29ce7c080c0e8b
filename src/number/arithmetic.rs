//! Arithmetic: addition, subtraction, multiplication, and floor division.
//!
//! Every operation evaluates both operands to `BigInt` magnitudes, combines them,
//! and writes the result back out in the operands' base. Operands are never
//! modified.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use tracing::debug;

use crate::base::Base;
use crate::error::ArithError;

use super::PositionalNumber;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl PositionalNumber {
    /// Adds two numbers of the same base.
    pub fn add(&self, other: &Self) -> Result<Self, ArithError> {
        self.combine(other, Operation::Add)
    }

    /// Subtracts `other` from `self`.
    ///
    /// When `other` is larger the difference is negative and only its absolute
    /// value is kept: `45 - 123` yields `78`.
    pub fn subtract(&self, other: &Self) -> Result<Self, ArithError> {
        self.combine(other, Operation::Subtract)
    }

    /// Multiplies two numbers of the same base.
    pub fn multiply(&self, other: &Self) -> Result<Self, ArithError> {
        self.combine(other, Operation::Multiply)
    }

    /// Floor division. Fails with `DivisionByZero` if `other` has magnitude zero.
    pub fn divide(&self, other: &Self) -> Result<Self, ArithError> {
        self.combine(other, Operation::Divide)
    }

    fn matching_base(&self, other: &Self) -> Result<Base, ArithError> {
        if self.base == other.base {
            Ok(self.base)
        } else {
            Err(ArithError::TypeMismatch {
                lhs: self.base,
                rhs: other.base,
            })
        }
    }

    fn combine(&self, other: &Self, operation: Operation) -> Result<Self, ArithError> {
        let base = self.matching_base(other)?;
        let lhs = self.magnitude();
        let rhs = other.magnitude();

        let result: BigInt = match operation {
            Operation::Add => &lhs + &rhs,
            Operation::Subtract => &lhs - &rhs,
            Operation::Multiply => &lhs * &rhs,
            Operation::Divide => {
                if rhs.is_zero() {
                    return Err(ArithError::DivisionByZero);
                }
                lhs.div_floor(&rhs)
            }
        };

        debug!(?operation, %base, %lhs, %rhs, %result, "positional arithmetic");
        if result.is_negative() {
            debug!(%base, %result, "negative result stored as its magnitude");
        }

        Ok(Self::from_magnitude(base, &result))
    }
}
