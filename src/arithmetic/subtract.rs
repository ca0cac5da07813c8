use core::ops::{Sub, SubAssign};

use crate::digit::{self, Digit, SignedDoubleDigit};
use crate::{BigInteger, DigitSequence, Sign};
use super::Magnitude;

/// Subtract with borrow: returns the low digit of `a - b + acc`, leaving the borrow
/// (`0` or `-1`) in `acc`.
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= digit::BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

/// Requires `self >= subtrahend`.
impl SubAssign<&Magnitude> for Magnitude {
    fn sub_assign(&mut self, subtrahend: &Magnitude) {
        debug_assert!(*self >= *subtrahend);
        self.0.normalize();
        let borrow = sub_assign_borrow(&mut self.0.words, subtrahend.le_words());
        debug_assert_eq!(borrow, 0);
        self.0.normalize();
    }
}

/// `abs_sub`: the signed difference $|a| - |b|$.
impl Sub for &Magnitude {
    type Output = BigInteger;

    fn sub(self, subtrahend: Self) -> Self::Output {
        if self < subtrahend {
            return -(subtrahend - self);
        }

        let mut words = self.le_words().to_vec();
        sub_assign_borrow(&mut words, subtrahend.le_words());

        BigInteger::from_parts(Sign::Positive, DigitSequence::from_le_words(words))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::padded;

    const M: Digit = Digit::MAX;

    // (a, b, a - b), a >= b, words most-significant first
    const DIFFERENCE_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[0], &[0], &[0]),
        (&[1], &[0], &[1]),
        (&[5], &[5], &[0]),
        (&[1, 0], &[1], &[M]),
        (&[1, 0, 0], &[1], &[M, M]),
        (&[1, 0, 0], &[1, 0, 0], &[0]),
        (&[2, 0], &[1, M], &[1]),
        (&[1, 6, 8], &[4, 5], &[1, 2, 3]),
    ];

    fn magnitude(words: &[Digit]) -> Magnitude {
        Magnitude(DigitSequence::from_words(words))
    }

    #[test]
    fn sbb_borrows() {
        let mut borrow = 0;
        assert_eq!(sbb(0, 1, &mut borrow), M);
        assert_eq!(borrow, -1);
        assert_eq!(sbb(0, 0, &mut borrow), M);
        assert_eq!(borrow, -1);
        assert_eq!(sbb(5, 2, &mut borrow), 2);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn differences() {
        for &(a, b, c) in DIFFERENCE_TRIPLES {
            let (a, b, c) = (magnitude(a), magnitude(b), magnitude(c));

            let difference = &a - &b;
            assert!(!difference.is_negative());
            assert_eq!(difference.magnitude(), &c);

            // swapped operands flip the sign, except for zero
            let difference = &b - &a;
            assert_eq!(difference.is_negative(), !c.is_zero());
            assert_eq!(difference.magnitude(), &c);

            let mut d = a.clone();
            d -= &b;
            assert_eq!(d, c);
        }
    }

    #[test]
    fn leading_zero_words() {
        // subtrahend stored with more words than the minuend
        let a = magnitude(&[1, 0]);
        let b = Magnitude(padded(&[1], 3));

        let difference = &a - &b;
        assert!(!difference.is_negative());
        assert!(difference.digits().equals(&DigitSequence::from_digit(M)));
        assert!((&b - &a).is_negative());

        let mut d = a.clone();
        d -= &b;
        assert!(d.equals(&DigitSequence::from_digit(M)));

        let mut d = Magnitude(padded(&[9], 2));
        d -= &Magnitude(padded(&[4], 4));
        assert!(d.equals(&DigitSequence::from_digit(5)));
    }
}
