//! Signed arithmetic: pick the magnitude operation by the operand signs,
//! then fix up the sign.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::{BigInteger, Result, Sign};

fn add(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let (x, y) = (a.magnitude(), b.magnitude());
    match (a.sign(), b.sign()) {
        (Sign::Positive, Sign::Positive) => (x + y).into(),
        (Sign::Positive, Sign::Negative) => x - y,
        (Sign::Negative, Sign::Positive) => y - x,
        (Sign::Negative, Sign::Negative) => BigInteger::from_parts(Sign::Negative, (x + y).into_digits()),
    }
}

fn sub(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let (x, y) = (a.magnitude(), b.magnitude());
    match (a.sign(), b.sign()) {
        (Sign::Positive, Sign::Positive) => x - y,
        (Sign::Positive, Sign::Negative) => (x + y).into(),
        (Sign::Negative, Sign::Positive) => BigInteger::from_parts(Sign::Negative, (x + y).into_digits()),
        // -x + y
        (Sign::Negative, Sign::Negative) => y - x,
    }
}

fn mul(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let product = a.magnitude() * b.magnitude();
    BigInteger::from_parts(a.sign().product(b.sign()), product.into_digits())
}

impl BigInteger {
    /// Truncating division, and the matching remainder.
    ///
    /// The quotient rounds toward zero, the remainder has the sign of `self`
    /// (or is zero), as for primitive integers.
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        let (quotient, remainder) = self.magnitude().div_rem(divisor.magnitude())?;
        Ok((
            BigInteger::from_parts(self.sign().product(divisor.sign()), quotient.into_digits()),
            BigInteger::from_parts(self.sign(), remainder.into_digits()),
        ))
    }

    /// Truncating division; fails only for a zero divisor.
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}

/// Panics on a zero divisor, as primitive integers do.
fn div(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.checked_div(b) {
        Ok(quotient) => quotient,
        Err(error) => panic!("{}", error),
    }
}

/// Panics on a zero divisor, as primitive integers do.
fn rem(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.checked_rem(b) {
        Ok(remainder) => remainder,
        Err(error) => panic!("{}", error),
    }
}

/// Implements the operator for all val/ref combinations, plus the assign variants,
/// in terms of a function on two references.
macro_rules! forward_binop {
    (impl $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident => $f:ident) => {
        impl $Op<&BigInteger> for &BigInteger {
            type Output = BigInteger;
            fn $op(self, other: &BigInteger) -> BigInteger {
                $f(self, other)
            }
        }

        impl $Op<BigInteger> for &BigInteger {
            type Output = BigInteger;
            fn $op(self, other: BigInteger) -> BigInteger {
                $f(self, &other)
            }
        }

        impl $Op<&BigInteger> for BigInteger {
            type Output = BigInteger;
            fn $op(self, other: &BigInteger) -> BigInteger {
                $f(&self, other)
            }
        }

        impl $Op<BigInteger> for BigInteger {
            type Output = BigInteger;
            fn $op(self, other: BigInteger) -> BigInteger {
                $f(&self, &other)
            }
        }

        impl $OpAssign<&BigInteger> for BigInteger {
            fn $op_assign(&mut self, other: &BigInteger) {
                *self = $f(self, other);
            }
        }

        impl $OpAssign<BigInteger> for BigInteger {
            fn $op_assign(&mut self, other: BigInteger) {
                *self = $f(self, &other);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign => add);
forward_binop!(impl Sub, sub, SubAssign, sub_assign => sub);
forward_binop!(impl Mul, mul, MulAssign, mul_assign => mul);
forward_binop!(impl Div, div, DivAssign, div_assign => div);
forward_binop!(impl Rem, rem, RemAssign, rem_assign => rem);

impl Neg for BigInteger {
    type Output = BigInteger;
    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}
