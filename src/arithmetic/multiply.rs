use core::ops::Mul;

use crate::digit::{self, Digit, DoubleDigit};
use crate::DigitSequence;
use super::Magnitude;

/// Multiply-accumulate: returns the low digit of `a * b + acc`, leaving the high digit in `acc`.
///
/// Cannot overflow: $(2^{32} - 1)^2 + (2^{32} - 1) < 2^{64}$.
#[inline]
fn mac(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += (a as DoubleDigit) * (b as DoubleDigit);
    let (hi, lo) = digit::split(*acc);
    *acc = hi as DoubleDigit;
    lo
}

/// `abs_mul` by a single word.
impl Mul<Digit> for &Magnitude {
    type Output = Magnitude;

    fn mul(self, factor: Digit) -> Self::Output {
        let mut carry = 0;
        let mut words: alloc::vec::Vec<Digit> = self
            .le_words()
            .iter()
            .map(|&word| mac(word, factor, &mut carry))
            .collect();
        if carry != 0 {
            words.push(carry as Digit);
        }
        Magnitude(DigitSequence::from_le_words(words))
    }
}

/// `abs_mul`, schoolbook: one single-word product per word of `other`,
/// shifted into place and summed up.
impl Mul for &Magnitude {
    type Output = Magnitude;

    fn mul(self, other: Self) -> Self::Output {
        let mut product = Magnitude::zero();

        for (i, &word) in other.le_words().iter().enumerate() {
            let mut partial = self * word;
            partial.shl_words(i);
            product += &partial;
        }

        product
    }
}
