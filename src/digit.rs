//! A word on the machine. [`DigitSequence`][crate::DigitSequence] is composed of many digits.
//!
//! The base of every number in this crate is $2^{32}$, whatever the native
//! architecture.

/// One base-$2^{32}$ digit.
pub type Digit = u32;

/// Unsigned type with twice as many bits as [`Digit`].
pub type DoubleDigit = u64;

/// Signed type with twice as many bits as [`Digit`].
pub type SignedDoubleDigit = i64;

/// Width of a [`Digit`] in bits.
pub const BITS: usize = 32;

/// Largest [`Digit`], $2^{32} - 1$.
pub const MAX: Digit = Digit::MAX;

/// `1 << n`, with `n` saturated at `BITS - 1`.
///
/// Plain `1 << 32` overflows, which is exactly what the division range
/// guess would ask for when the quotient digit fills a whole word.
#[inline]
pub fn bit(n: usize) -> Digit {
    1 << n.min(BITS - 1)
}

/// Splits a double digit into `(hi, lo)`.
#[inline]
pub(crate) fn split(x: DoubleDigit) -> (Digit, Digit) {
    ((x >> BITS) as Digit, x as Digit)
}
