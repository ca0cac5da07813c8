use alloc::{string::String, vec::Vec};

use crate::digit::{self, Digit};
use crate::{Error, Result};

mod trait_implementations;

/// Unsigned magnitude in base $2^{32}$.
///
/// The public interface is *big endian*: position `0` is the most-significant
/// word, as in written numbers. Internal representation is little-endian,
/// so that growing at the most-significant end (the common case for carries
/// and products) is a push.
///
/// Implementation ***must ensure***, between public operations that are not
/// themselves word surgery ([`append`][Self::append], [`insert`][Self::insert],
/// [`remove`][Self::remove], [`get_mut`][Self::get_mut]):
/// - never empty
/// - zero is exactly one `0` word
/// - no leading zero word otherwise
///
/// Word surgery can break the last two; [`normalize`][Self::normalize] restores them.
/// `==`, ordering and hashing look at the value only, so leading zero words
/// never matter there. [`equals`][Self::equals] compares the words as stored.
#[derive(Clone)]
pub struct DigitSequence {
    // least-significant first
    pub(crate) words: Vec<Digit>,
}

// c'tors and such
impl DigitSequence {
    pub fn zero() -> Self {
        Self { words: alloc::vec![0] }
    }

    pub fn one() -> Self {
        Self::from_digit(1)
    }

    pub fn from_digit(digit: Digit) -> Self {
        Self { words: alloc::vec![digit] }
    }

    /// Words given most-significant first.
    pub fn from_words(words: &[Digit]) -> Self {
        Self::from_le_words(words.iter().rev().copied().collect())
    }

    /// Takes ownership of little-endian words, normalizing them.
    pub(crate) fn from_le_words(words: Vec<Digit>) -> Self {
        let mut sequence = Self { words };
        sequence.normalize();
        sequence
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let words = bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0, |word, &byte| (word << 8) | byte as Digit))
            .collect();
        Self::from_le_words(words)
    }

    /// Minimal big-endian bytes (a single `0` for zero).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes: Vec<u8> = self.iter().flat_map(|word| word.to_be_bytes()).collect();
        let leading = bytes.iter().take_while(|&&byte| byte == 0).count();
        match leading {
            l if l == bytes.len() => alloc::vec![0],
            l => bytes[l..].to_vec(),
        }
    }
}

// word surgery
impl DigitSequence {
    /// Adds `word` at the least-significant end.
    pub fn append(&mut self, word: Digit) {
        self.words.insert(0, word);
    }

    /// Inserts `word` before position `index`, so it lands *at* `index`.
    ///
    /// `index == self.len()` appends; anything further out does nothing.
    pub fn insert(&mut self, index: usize, word: Digit) {
        let len = self.len();
        if index <= len {
            self.words.insert(len - index, word);
        }
    }

    /// Removes the first word (from the most-significant end) equal to `word`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, word: Digit) -> bool {
        match self.words.iter().rposition(|&w| w == word) {
            Some(position) => {
                self.words.remove(position);
                true
            }
            None => false,
        }
    }

    /// Strips leading zero words, keeping one for zero.
    pub fn normalize(&mut self) {
        while self.words.len() > 1 && self.words.last() == Some(&0) {
            self.words.pop();
        }
        if self.words.is_empty() {
            self.words.push(0);
        }
    }
}

// queries
impl DigitSequence {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Same length, and the same word at every position.
    pub fn equals(&self, other: &Self) -> bool {
        self.words == other.words
    }

    /// Word at `index`, most-significant first.
    pub fn get(&self, index: usize) -> Result<Digit> {
        let len = self.len();
        if index < len {
            Ok(self.words[len - 1 - index])
        } else {
            Err(Error::OutOfRange)
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Digit> {
        let len = self.len();
        if index < len {
            Ok(&mut self.words[len - 1 - index])
        } else {
            Err(Error::OutOfRange)
        }
    }

    /// Words, most-significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.words.iter().rev().copied()
    }

    /// Index of the first set bit, counting from the top bit of the leading word.
    ///
    /// `None` iff zero.
    pub fn first_set_bit_position(&self) -> Option<usize> {
        self.iter()
            .position(|word| word != 0)
            .map(|i| i * digit::BITS + self.get(i).map_or(0, |w| w.leading_zeros() as usize))
    }

    /// Number of significant bits, `0` for zero.
    pub fn bit_len(&self) -> usize {
        match self.first_set_bit_position() {
            Some(position) => self.len() * digit::BITS - position,
            None => 0,
        }
    }

    /// Every word as 32 binary digits, most-significant first.
    pub fn to_bit_string(&self) -> String {
        let mut bits = String::with_capacity(self.len() * digit::BITS);
        for word in self.iter() {
            bits.extend((0..digit::BITS).rev().map(|i| if (word >> i) & 1 == 1 { '1' } else { '0' }));
        }
        bits
    }

    /// Little-endian words without leading zero words (empty for zero).
    pub(crate) fn le_words(&self) -> &[Digit] {
        trait_implementations::significant(&self.words)
    }
}

impl Default for DigitSequence {
    fn default() -> Self {
        Self::zero()
    }
}
