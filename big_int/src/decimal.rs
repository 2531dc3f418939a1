//! # Decimal buffers
//! Raw decimal arithmetic used while a `BigInt` is being built from text or
//! rendered back to text. A buffer holds one decimal digit (`0..=9`) per
//! byte, least significant first, and never relies on `BigInt` itself.
//!
//! A canonical buffer has no high zero digits, except the buffer `[0]`.

use std::cmp::Ordering;

use crate::big_num_constants::{DECIMAL_DIGITS, DECIMAL_RADIX};
use crate::error::{BigIntError, Result};

/// Splits `text` into its sign and a canonical magnitude buffer.
/// Returns `(negative, digits)`, `"-0"` comes back as a non-negative zero.
pub fn parse(text: &str) -> Result<(bool, Vec<u8>)> {
    let invalid = || BigIntError::InvalidDigitSequence(text.to_string());

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let mut digits = Vec::with_capacity(body.len());
    for b in body.bytes().rev() {
        if !b.is_ascii_digit() {
            return Err(invalid());
        }
        digits.push(b - b'0');
    }
    trim(&mut digits);

    let negative = negative && !is_zero(&digits);
    Ok((negative, digits))
}

pub fn one() -> Vec<u8> {
    vec![1]
}

pub fn zero() -> Vec<u8> {
    vec![0]
}

pub fn is_zero(buf: &[u8]) -> bool {
    buf.iter().all(|d| *d == 0)
}

/// Drops high zero digits, keeping at least one digit.
pub fn trim(buf: &mut Vec<u8>) {
    while buf.len() > 1 && buf.last() == Some(&0) {
        buf.pop();
    }
    if buf.is_empty() {
        buf.push(0);
    }
}

pub fn double(buf: &mut Vec<u8>) {
    let mut carry = 0;
    for d in buf.iter_mut() {
        let cur = *d * 2 + carry;
        *d = cur % DECIMAL_RADIX;
        carry = cur / DECIMAL_RADIX;
    }
    if carry != 0 {
        buf.push(carry);
    }
}

pub fn add_assign(acc: &mut Vec<u8>, addend: &[u8]) {
    if acc.len() < addend.len() {
        acc.resize(addend.len(), 0);
    }
    let mut carry = 0;
    let mut i = 0;
    while i < addend.len() || carry != 0 {
        if i == acc.len() {
            acc.push(0);
        }
        let cur = acc[i] + carry + addend.get(i).copied().unwrap_or(0);
        acc[i] = cur % DECIMAL_RADIX;
        carry = cur / DECIMAL_RADIX;
        i += 1;
    }
}

/// `minuend -= subtrahend`, the caller guarantees `minuend >= subtrahend`.
pub fn sub_assign(minuend: &mut Vec<u8>, subtrahend: &[u8]) {
    debug_assert!(cmp(minuend, subtrahend) != Ordering::Less);
    let mut borrow = 0;
    let mut i = 0;
    while i < subtrahend.len() || borrow != 0 {
        let sub = subtrahend.get(i).copied().unwrap_or(0) + borrow;
        if minuend[i] < sub {
            minuend[i] = minuend[i] + DECIMAL_RADIX - sub;
            borrow = 1;
        } else {
            minuend[i] -= sub;
            borrow = 0;
        }
        i += 1;
    }
    trim(minuend);
}

/// Orders two canonical buffers.
pub fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub fn render(buf: &[u8]) -> String {
    buf.iter()
        .rev()
        .map(|d| DECIMAL_DIGITS[*d as usize])
        .collect()
}

#[cfg(test)]
fn buf(s: &str) -> Vec<u8> {
    parse(s).unwrap().1
}

#[test]
fn test_parse() {
    assert_eq!(parse("0").unwrap(), (false, vec![0]));
    assert_eq!(parse("-0").unwrap(), (false, vec![0]));
    assert_eq!(parse("000120").unwrap(), (false, vec![0, 2, 1]));
    assert_eq!(parse("-45").unwrap(), (true, vec![5, 4]));
}

#[test]
fn test_parse_rejects() {
    for bad in ["", "-", "+1", " 1", "1 ", "12a3", "--1", "1-", "1e5", "١"] {
        assert_eq!(
            parse(bad),
            Err(BigIntError::InvalidDigitSequence(bad.to_string())),
            "input {:?}",
            bad
        );
    }
}

#[test]
fn test_double() {
    let mut a = buf("1");
    for _ in 0..64 {
        double(&mut a);
    }
    assert_eq!(render(&a), "18446744073709551616");

    let mut z = zero();
    double(&mut z);
    assert_eq!(render(&z), "0");
}

#[test]
fn test_add_sub() {
    let mut a = buf("999999999999");
    add_assign(&mut a, &buf("1"));
    assert_eq!(render(&a), "1000000000000");

    sub_assign(&mut a, &buf("1"));
    assert_eq!(render(&a), "999999999999");

    let mut b = buf("5");
    add_assign(&mut b, &buf("123456"));
    assert_eq!(render(&b), "123461");

    sub_assign(&mut b, &buf("123461"));
    assert_eq!(b, zero());
}

#[test]
fn test_cmp() {
    assert_eq!(cmp(&buf("10"), &buf("9")), Ordering::Greater);
    assert_eq!(cmp(&buf("123"), &buf("124")), Ordering::Less);
    assert_eq!(cmp(&buf("77"), &buf("077")), Ordering::Equal);
}
