//! Decimal text helpers.
//!
//! All functions work on unsigned ASCII digit strings, most-significant digit
//! first. Only [`is_valid`] accepts a sign.

use alloc::{string::String, vec::Vec};

/// An optional leading `-`, followed by one or more ASCII digits.
pub fn is_valid(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Only ASCII digits, no sign. The empty string counts as zero.
fn is_unsigned(decimal: &[u8]) -> bool {
    decimal.iter().all(u8::is_ascii_digit)
}

/// Binary digits of an unsigned decimal, most-significant bit first.
///
/// Zero (in any spelling) is `"0"`.
///
/// # Panics
///
/// If `decimal` contains anything but ASCII digits.
pub fn to_binary(decimal: &str) -> String {
    assert!(is_unsigned(decimal.as_bytes()), "not an unsigned decimal: {:?}", decimal);
    // repeated halving, collecting the remainders
    let mut digits: Vec<u8> = decimal.bytes().map(|b| b - b'0').collect();
    let mut bits = Vec::new();

    loop {
        let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        digits.drain(..start);
        if digits.is_empty() {
            break;
        }

        let mut remainder = 0;
        for d in digits.iter_mut() {
            let current = remainder * 10 + *d;
            *d = current / 2;
            remainder = current % 2;
        }
        bits.push(b'0' + remainder);
    }

    if bits.is_empty() {
        bits.push(b'0');
    }
    bits.reverse();
    ascii(bits)
}

/// Twice the value.
///
/// # Panics
///
/// If `decimal` contains anything but ASCII digits.
pub fn double(decimal: &str) -> String {
    let mut digits = decimal.as_bytes().to_vec();
    double_in_place(&mut digits);
    ascii(digits)
}

/// The value plus one.
///
/// # Panics
///
/// If `decimal` contains anything but ASCII digits.
pub fn increment(decimal: &str) -> String {
    let mut digits = decimal.as_bytes().to_vec();
    increment_in_place(&mut digits);
    ascii(digits)
}

/// Separators every three digits, counted from the least-significant end.
pub fn group_thousands(decimal: &str) -> String {
    let len = decimal.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in decimal.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub(crate) fn double_in_place(digits: &mut Vec<u8>) {
    assert!(is_unsigned(digits), "not an unsigned decimal");
    let mut carry = 0;
    for d in digits.iter_mut().rev() {
        let twice = (*d - b'0') * 2 + carry;
        *d = b'0' + twice % 10;
        carry = twice / 10;
    }
    if carry != 0 {
        digits.insert(0, b'0' + carry);
    }
}

pub(crate) fn increment_in_place(digits: &mut Vec<u8>) {
    assert!(is_unsigned(digits), "not an unsigned decimal");
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Only ever called with ASCII digits and separators.
pub(crate) fn ascii(bytes: Vec<u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}
