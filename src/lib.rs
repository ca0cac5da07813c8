//! Signed integers of unbounded size, in base $2^{32}$.
//!
//! ```
//! use inf_int::{BigInteger, Formatting};
//!
//! let a: BigInteger = "999999999999999999".parse().unwrap();
//! let b = BigInteger::from(1);
//! assert_eq!((&a + &b).to_string(), "1000000000000000000");
//! assert_eq!((&a + &b).to_string_with(Formatting { comma: true }), "1,000,000,000,000,000,000");
//!
//! let q = BigInteger::parse("-7").unwrap().checked_div(&BigInteger::from(2)).unwrap();
//! assert_eq!(q, BigInteger::from(-3));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod arithmetic;
pub use arithmetic::{adc, sbb, Magnitude};
pub mod decimal;
pub mod digit;
pub use digit::Digit;
mod error;
pub use error::{Error, Result};
mod integer;
pub use integer::{BigInteger, Formatting, Sign};
mod numbers;
pub use numbers::DigitSequence;

#[cfg(test)]
mod fixtures;
