use core::fmt;

/// Everything that can go wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Text is not an optional `-` followed by one or more ASCII digits.
    InvalidFormat,
    /// Divisor magnitude is zero.
    DivisionByZero,
    /// Word index at or beyond the length of a sequence.
    OutOfRange,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidFormat => "invalid integer format",
            Error::DivisionByZero => "division by zero",
            Error::OutOfRange => "index out of range",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
