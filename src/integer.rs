//! Signed integers of unbounded size.

use alloc::string::String;
use core::{cmp::Ordering, convert::TryFrom, fmt, str::FromStr};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::digit::{self, Digit};
use crate::{decimal, DigitSequence, Error, Magnitude, Result};

/// Sign of a [`BigInteger`]. Zero is always `Positive`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// `Negative` iff exactly one of the two is.
    pub fn product(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::Positive
    }
}

/// Options for rendering decimal text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Formatting {
    /// Group digits by thousands with `,`.
    pub comma: bool,
}

/// Sign and magnitude.
///
/// All constructors normalize: no leading zero words, and zero is never
/// negative.
#[derive(Clone, Default, Hash)]
pub struct BigInteger {
    sign: Sign,
    digits: DigitSequence,
}

// c'tors and such
impl BigInteger {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from_parts(Sign::Positive, DigitSequence::one())
    }

    pub fn from_parts(sign: Sign, digits: DigitSequence) -> Self {
        let mut integer = Self { sign, digits };
        integer.normalize();
        integer
    }

    pub fn into_parts(self) -> (Sign, DigitSequence) {
        (self.sign, self.digits)
    }

    /// Parses an optional `-` followed by one or more ASCII digits.
    ///
    /// `"-0"` and leading zeros are fine, and normalize away.
    pub fn parse(s: &str) -> Result<Self> {
        if !decimal::is_valid(s) {
            log::debug!("not a decimal integer: {:?}", s);
            return Err(Error::InvalidFormat);
        }

        let (sign, unsigned) = match s.strip_prefix('-') {
            Some(unsigned) => (Sign::Negative, unsigned),
            None => (Sign::Positive, s),
        };

        // fill words from the least-significant bit up, growing at the top
        let mut digits = DigitSequence::zero();
        let mut filled = 0;
        for bit in decimal::to_binary(unsigned).bytes().rev() {
            if filled == digit::BITS {
                digits.insert(0, 0);
                filled = 0;
            }
            if bit == b'1' {
                *digits.get_mut(0)? |= 1 << filled;
            }
            filled += 1;
        }

        Ok(Self::from_parts(sign, digits))
    }

    fn normalize(&mut self) {
        self.digits.normalize();
        if self.digits.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

// queries
impl BigInteger {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// The absolute value, as unsigned number.
    pub fn magnitude(&self) -> &Magnitude {
        Magnitude::ref_cast(&self.digits)
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(Sign::Positive, self.digits.clone())
    }

    /// Flips the sign, unless zero.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
    }
}

// rendering
impl BigInteger {
    /// Decimal text, `-` in front if negative.
    pub fn to_string_with(&self, formatting: Formatting) -> String {
        let unsigned = self.unsigned_decimal(formatting);
        match self.sign {
            Sign::Positive => unsigned,
            Sign::Negative => {
                let mut signed = String::with_capacity(unsigned.len() + 1);
                signed.push('-');
                signed.push_str(&unsigned);
                signed
            }
        }
    }

    /// Double-and-add over the bits, top down.
    ///
    /// Quadratic in the size of the number.
    fn unsigned_decimal(&self, formatting: Formatting) -> String {
        let mut digits = alloc::vec![b'0'];
        for bit in self.digits.to_bit_string().bytes() {
            decimal::double_in_place(&mut digits);
            if bit == b'1' {
                decimal::increment_in_place(&mut digits);
            }
        }

        let plain = decimal::ascii(digits);
        if formatting.comma {
            decimal::group_thousands(&plain)
        } else {
            plain
        }
    }
}

impl fmt::Display for BigInteger {
    /// The alternate flag (`{:#}`) groups digits by thousands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unsigned = self.unsigned_decimal(Formatting { comma: f.alternate() });
        f.pad_integral(!self.is_negative(), "", &unsigned)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl FromStr for BigInteger {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<DigitSequence> for BigInteger {
    fn from(digits: DigitSequence) -> Self {
        Self::from_parts(Sign::Positive, digits)
    }
}

impl From<Magnitude> for BigInteger {
    fn from(magnitude: Magnitude) -> Self {
        Self::from_parts(Sign::Positive, magnitude.into_digits())
    }
}

fn digits_from_u128(mut n: u128) -> DigitSequence {
    let mut words = alloc::vec::Vec::new();
    while n != 0 {
        words.push(n as Digit);
        n >>= digit::BITS;
    }
    DigitSequence::from_le_words(words)
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(n: $t) -> Self {
                Self::from_parts(Sign::Positive, digits_from_u128(n as u128))
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(n: $t) -> Self {
                let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                Self::from_parts(sign, digits_from_u128((n as i128).unsigned_abs()))
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.sign == other.sign && self.digits == other.digits
    }
}

impl Eq for BigInteger {}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude().cmp(other.magnitude()),
            // larger magnitude is more negative
            (Sign::Negative, Sign::Negative) => other.magnitude().cmp(self.magnitude()),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for BigInteger {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        self.sign = Sign::Positive;
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for BigInteger {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut words = <Vec<Digit> as quickcheck::Arbitrary>::arbitrary(g);
        words.truncate(6);
        let sign = if <bool as quickcheck::Arbitrary>::arbitrary(g) { Sign::Negative } else { Sign::Positive };
        Self::from_parts(sign, DigitSequence::from_words(&words))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let sign = self.sign;
        let words: Vec<Digit> = self.digits.iter().collect();
        Box::new(
            quickcheck::Arbitrary::shrink(&words)
                .map(move |words| Self::from_parts(sign, DigitSequence::from_words(&words))),
        )
    }
}
