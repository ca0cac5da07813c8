//! Arithmetic on magnitudes, and the signed operations built on it.
//!
//! Everything interesting happens on [`Magnitude`], a view of a
//! [`DigitSequence`] as an unsigned number. The signed operations on
//! [`BigInteger`][crate::BigInteger] only pick the magnitude operation
//! matching the operand signs, and fix up the sign afterwards.

use core::ops::{Deref, DerefMut};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::DigitSequence;

mod shift;
mod add;
mod subtract;
mod multiply;
mod divide;
mod impls;

pub use add::adc;
pub use subtract::sbb;

/// Unsigned value of a [`DigitSequence`].
///
/// Obtain one from a sequence without copying via [`RefCast`], e.g.
/// `Magnitude::ref_cast(&digits)`. Results are always normalized.
#[repr(transparent)]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, RefCast)]
pub struct Magnitude(pub DigitSequence);

impl Magnitude {
    pub fn zero() -> Self {
        Self(DigitSequence::zero())
    }

    pub fn one() -> Self {
        Self(DigitSequence::one())
    }

    pub fn into_digits(self) -> DigitSequence {
        self.0
    }
}

impl Deref for Magnitude {
    type Target = DigitSequence;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Magnitude {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<DigitSequence> for Magnitude {
    fn from(mut digits: DigitSequence) -> Self {
        digits.normalize();
        Self(digits)
    }
}

impl Zeroize for Magnitude {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
