//! Shared test data.
//!
//! Word tables are little-endian, as in num-bigint where most of them come from.

use crate::{Digit, DigitSequence};

pub const N1: Digit = -1i64 as Digit;
pub const N2: Digit = -2i64 as Digit;
pub const M: Digit = Digit::MAX;

pub const MUL_TRIPLES: &'static [(&'static [Digit], &'static [Digit], &'static [Digit])] = &[
    (&[], &[], &[]),
    (&[], &[1], &[]),
    (&[2], &[], &[]),
    (&[1], &[1], &[1]),
    (&[2], &[3], &[6]),
    (&[1], &[1, 1, 1], &[1, 1, 1]),
    (&[1, 2, 3], &[3], &[3, 6, 9]),
    (&[1, 1, 1], &[N1], &[N1, N1, N1]),
    (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
    (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
    (&[N1], &[N1], &[1, N2]),
    (&[N1, N1], &[N1], &[1, N1, N2]),
    (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
    (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
    (&[M / 2 + 1], &[2], &[0, 1]),
    (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
    (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
    (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
    (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
    (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
    (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
];

pub const DIV_REM_QUADRUPLES: &'static [(
    &'static [Digit],
    &'static [Digit],
    &'static [Digit],
    &'static [Digit],
)] = &[
    (&[1], &[2], &[], &[1]),
    (&[3], &[2], &[1], &[1]),
    (&[1, 1], &[2], &[M / 2 + 1], &[1]),
    (&[1, 1, 1], &[2], &[M / 2 + 1, M / 2 + 1], &[1]),
    (&[0, 1], &[N1], &[1], &[1]),
    (&[N1, N1], &[N2], &[2, 1], &[3]),
];

/// 50!
pub const FACTORIAL_50: &str = "30414093201713378043612608166064768844377641568960512000000000000";

/// 2^128
pub const TWO_TO_THE_128: &str = "340282366920938463463374607431768211456";

/// 2^256 - 1
pub const U256_MAX: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// 10^40
pub const TEN_TO_THE_40: &str = "10000000000000000000000000000000000000000";

/// `words` (most-significant first) below `zeros` leading zero words, as
/// left behind by word surgery.
pub fn padded(words: &[Digit], zeros: usize) -> DigitSequence {
    let mut digits = DigitSequence::from_words(words);
    for _ in 0..zeros {
        digits.insert(0, 0);
    }
    digits
}
