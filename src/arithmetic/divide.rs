use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::digit::{self, Digit, DoubleDigit};
use crate::{DigitSequence, Error, Result};
use super::Magnitude;

/// Largest `q` with `q * divisor <= remainder`, together with that product.
///
/// The caller must ensure `divisor <= remainder < divisor * 2^32`, so that
/// `q` is a non-zero digit.
///
/// With `d` the difference in bit length, $2^{d-1} \le q < 2^{d+1}$;
/// binary search over that range.
fn quotient_digit(remainder: &Magnitude, divisor: &Magnitude) -> (Digit, Magnitude) {
    let d = remainder.bit_len() - divisor.bit_len();
    debug_assert!(d <= digit::BITS);

    let mut lower = digit::bit(d.saturating_sub(1)) as DoubleDigit;
    let mut upper = ((2 as DoubleDigit) << d).saturating_sub(1).min(digit::MAX as DoubleDigit);

    loop {
        debug_assert!(lower <= upper);
        let mid = lower + (upper - lower) / 2;

        let minuend = divisor * (mid as Digit);
        // = divisor * (mid + 1)
        let over_minuend = &minuend + divisor;

        match (minuend.cmp(remainder), over_minuend.cmp(remainder)) {
            (Ordering::Less, Ordering::Less) => lower = mid + 1,
            // mid + 1 fits exactly
            (Ordering::Less, Ordering::Equal) => return ((mid + 1) as Digit, over_minuend),
            (Ordering::Less, Ordering::Greater) | (Ordering::Equal, _) => return (mid as Digit, minuend),
            (Ordering::Greater, _) => upper = mid - 1,
        }
    }
}

impl Magnitude {
    /// `abs_div`: returns `(q, r)` with `self = q * divisor + r` and `r < divisor`.
    ///
    /// Schoolbook long division in base $2^{32}$, one quotient digit per step.
    pub fn div_rem(&self, divisor: &Magnitude) -> Result<(Magnitude, Magnitude)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        match self.cmp(divisor) {
            Ordering::Less => return Ok((Magnitude::zero(), Magnitude::from(self.0.clone()))),
            Ordering::Equal => return Ok((Magnitude::one(), Magnitude::zero())),
            Ordering::Greater => {}
        }

        // `Greater` guarantees at least as many significant words
        let q_len = self.le_words().len() - divisor.le_words().len() + 1;
        let mut remainder = self.clone();
        // most-significant first
        let mut quotient: Vec<Digit> = Vec::with_capacity(q_len);

        // aligned one word above the top quotient digit, shifted down before each step
        let mut shifted = divisor.shifted_left_words(q_len);

        for step in 0..q_len {
            shifted.shr_words(1);

            let q = if remainder < shifted {
                0
            } else {
                let (q, product) = quotient_digit(&remainder, &shifted);
                remainder -= &product;
                q
            };

            log::trace!("quotient digit {} of {}: {:#010x}", step + 1, q_len, q);
            quotient.push(q);
        }

        debug_assert!(remainder < *divisor);
        quotient.reverse();
        Ok((Magnitude(DigitSequence::from_le_words(quotient)), remainder))
    }

    /// Quotient of [`div_rem`][Self::div_rem].
    pub fn checked_div(&self, divisor: &Magnitude) -> Result<Magnitude> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }
}
