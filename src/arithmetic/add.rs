use core::ops::{Add, AddAssign};

use crate::digit::{self, Digit, DoubleDigit};
use crate::DigitSequence;
use super::Magnitude;

//
// from num-bigint
//

/// Add with carry: returns the low digit of `a + b + acc`, leaving the carry in `acc`.
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= digit::BITS;
    lo
}

/// Two argument addition of little-endian slices: `a += b`, returning the carry.
///
/// The caller _must_ ensure that `a` is at least as long as `b`.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl AddAssign<&Magnitude> for Magnitude {
    fn add_assign(&mut self, summand: &Magnitude) {
        let summand = summand.le_words();
        let words = &mut self.0.words;
        if words.len() < summand.len() {
            words.resize(summand.len(), 0);
        }
        let carry = add_assign_carry(words, summand);
        if carry != 0 {
            words.push(carry);
        }
        self.0.normalize();
    }
}

/// `abs_add`
impl Add for &Magnitude {
    type Output = Magnitude;

    fn add(self, summand: Self) -> Self::Output {
        let (a, b) = (self.le_words(), summand.le_words());
        let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

        let mut words = longer.to_vec();
        let carry = add_assign_carry(&mut words, shorter);
        words.push(carry);

        Magnitude(DigitSequence::from_le_words(words))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::padded;

    const M: Digit = Digit::MAX;

    // (a, b, a + b), words most-significant first
    const SUM_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[0], &[0], &[0]),
        (&[0], &[1], &[1]),
        (&[1], &[1], &[2]),
        (&[M], &[1], &[1, 0]),
        (&[M, M], &[1], &[1, 0, 0]),
        (&[1, M], &[1], &[2, 0]),
        (&[1, 2, 3], &[4, 5], &[1, 6, 8]),
        (&[M, M, M], &[M, M, M], &[1, M, M, M - 1]),
        (&[5, 0, 0, 0], &[M], &[5, 0, 0, M]),
    ];

    #[test]
    fn adc_carries() {
        let mut carry = 0;
        assert_eq!(adc(M, 1, &mut carry), 0);
        assert_eq!(carry, 1);
        assert_eq!(adc(M, M, &mut carry), M);
        assert_eq!(carry, 1);
        assert_eq!(adc(1, 2, &mut carry), 4);
        assert_eq!(carry, 0);
    }

    #[test]
    fn sums() {
        for &(a, b, c) in SUM_TRIPLES {
            let a = Magnitude(DigitSequence::from_words(a));
            let b = Magnitude(DigitSequence::from_words(b));
            let c = Magnitude(DigitSequence::from_words(c));

            assert_eq!(&a + &b, c);
            assert_eq!(&b + &a, c);

            let mut d = a.clone();
            d += &b;
            assert_eq!(d, c);
        }
    }

    #[test]
    fn leading_zero_words() {
        let a = Magnitude(padded(&[M], 3));
        let b = Magnitude(padded(&[1, 1], 1));
        let c = Magnitude(DigitSequence::from_words(&[2, 0]));

        assert!((&a + &b).equals(&c));
        assert!((&b + &a).equals(&c));

        let mut d = Magnitude(DigitSequence::one());
        d += &Magnitude(padded(&[M, M], 2));
        assert!(d.equals(&DigitSequence::from_words(&[1, 0, 0])));
    }
}
