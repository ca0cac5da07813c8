//! Shifts by whole words.
//!
//! Note that "left" means "higher number", i.e. multiplication by $2^{32n}$.

use super::Magnitude;

impl Magnitude {
    /// Multiplies by $2^{32n}$ (`lshift32`).
    pub fn shl_words(&mut self, n: usize) {
        self.0.normalize();
        if self.is_zero() {
            return;
        }
        let words = &mut self.0.words;
        words.resize(words.len() + n, 0);
        words.rotate_right(n);
    }

    /// Divides by $2^{32n}$, dropping the remainder (`rshift32`).
    pub fn shr_words(&mut self, n: usize) {
        let words = &mut self.0.words;
        words.drain(..n.min(words.len()));
        self.0.normalize();
    }

    pub fn shifted_left_words(&self, n: usize) -> Self {
        let mut shifted = self.clone();
        shifted.shl_words(n);
        shifted
    }
}
