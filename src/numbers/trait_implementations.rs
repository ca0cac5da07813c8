use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use zeroize::Zeroize;

use super::DigitSequence;
use crate::digit::Digit;

/// Little-endian words without leading zeros.
pub(crate) fn significant(words: &[Digit]) -> &[Digit] {
    let l = words.iter().rposition(|&word| word != 0).map_or(0, |i| i + 1);
    &words[..l]
}

/// Unsigned big-endian ordering; shorter (significant) sequence is smaller,
/// then the first differing word from the top decides.
pub(crate) fn cmp_words(m: &[Digit], n: &[Digit]) -> Ordering {
    let m = significant(m);
    let n = significant(n);
    match m.len().cmp(&n.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for (a, b) in m.iter().rev().zip(n.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived implementation would.
impl Ord for DigitSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(&self.words, &other.words)
    }
}

impl PartialOrd for DigitSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Agrees with `Ord`: equal values, whatever the leading zero words.
impl PartialEq for DigitSequence {
    fn eq(&self, other: &Self) -> bool {
        significant(&self.words) == significant(&other.words)
    }
}

impl Eq for DigitSequence {}

impl Hash for DigitSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        significant(&self.words).hash(state);
    }
}

impl From<Digit> for DigitSequence {
    fn from(digit: Digit) -> Self {
        Self::from_digit(digit)
    }
}

impl Zeroize for DigitSequence {
    /// Wipes every word, leaving zero behind.
    fn zeroize(&mut self) {
        self.words.zeroize();
        self.words.push(0);
    }
}

impl fmt::Debug for DigitSequence {
    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }

    /// Big-endian bytes in hex.
    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        write!(f, "{}", delog::hex_str!(&bytes[..]))
    }
}
