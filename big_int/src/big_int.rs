//! # BigInt
//! Arbitrary-precision signed integers stored as a two's-complement bit vector of unbounded width.
//! The width grows and shrinks with the value, every public operation leaves the value in
//! canonical (minimal-width) form.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use log::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::decimal;
use crate::error::{BigIntError, Result};

/// Implements a binary operator and its compound assignment for every owned/borrowed
/// combination, on top of an in-place `fn(&mut BigInt, &BigInt)`.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $core: ident) => {
        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                self.$core(rhs);
            }
        }

        impl $assign_imp for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                self.$core(&rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> Self::Output {
                self.$core(rhs);
                self
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> Self::Output {
                self.$core(&rhs);
                self
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                let mut result = self.clone();
                result.$core(rhs);
                result
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                let mut result = self.clone();
                result.$core(&rhs);
                result
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// `1` or `-1`, always equal to the top stored digit read as a sign bit.
    pub(crate) sign: i8,
    /// Two's-complement digits, least significant first. The last digit is the sign bit.
    pub(crate) digits: Vec<u8>,
}

// 位向量
impl BigInt {
    /// Builds a value from raw two's-complement digits and canonicalizes it.
    pub(crate) fn from_digits(digits: Vec<u8>) -> BigInt {
        let mut result = BigInt { sign: 1, digits };
        result.trim();
        result
    }

    pub fn zero() -> BigInt {
        BigInt { sign: 1, digits: vec![0] }
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    pub fn minus_one() -> BigInt {
        NEG_CACHE[1].clone()
    }

    /// The sign-extension bit: `1` for negative values, `0` otherwise.
    #[inline(always)]
    pub(crate) fn fill(&self) -> u8 {
        if self.sign < 0 {
            1
        } else {
            0
        }
    }

    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.digits.len()
    }

    /// Digit `i` of the infinitely sign-extended encoding.
    #[inline(always)]
    pub(crate) fn digit(&self, i: usize) -> u8 {
        match self.digits.get(i) {
            Some(d) => *d,
            None => self.fill(),
        }
    }

    /// Grows the vector to `new_len` digits, filling the new high positions with `fill`.
    pub(crate) fn resize(&mut self, new_len: usize, fill: u8) {
        if new_len > self.digits.len() {
            self.digits.resize(new_len, fill);
        }
    }

    /// Drops redundant high sign-extension digits and recomputes `sign` from the top digit.
    /// At least one digit always remains.
    pub(crate) fn trim(&mut self) {
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        let top = self.digits[self.digits.len() - 1];
        let mut len = self.digits.len();
        while len > 1 && self.digits[len - 2] == top {
            len -= 1;
        }
        self.digits.truncate(len);
        self.sign = if top == 1 { -1 } else { 1 };
    }

    /// 按位取反再加一, within the current width. The final carry is discarded.
    pub(crate) fn complement_increment(digits: &mut [u8]) {
        digits.iter_mut().for_each(|d| *d ^= 1);
        for d in digits.iter_mut() {
            if *d == 1 {
                *d = 0;
            } else {
                *d = 1;
                break;
            }
        }
    }

    /// Number of digits of a non-negative value without its sign bit, `0` for zero.
    pub(crate) fn magnitude_len(&self) -> usize {
        debug_assert!(self.sign > 0);
        if self.is_zero() {
            0
        } else {
            self.width() - 1
        }
    }
}

// 杂项
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else {
            self.sign
        }
    }

    /// Stored width in two's complement, sign bit included.
    pub fn bit_width(&self) -> usize {
        self.width()
    }

    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// The stored digits, most significant (the sign bit) first.
    pub fn to_binary_string(&self) -> String {
        self.digits
            .iter()
            .rev()
            .map(|d| DECIMAL_DIGITS[*d as usize])
            .collect()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现构造
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(mag: u128, negative: bool) -> BigInt {
        if mag <= MAX_CONSTANT as u128 {
            if negative {
                NEG_CACHE[mag as usize].clone()
            } else {
                POS_CACHE[mag as usize].clone()
            }
        } else {
            BigInt::from_magnitude(mag, negative)
        }
    }

    /// Halves `mag` down to zero to collect its bits, then negates in two's complement if needed.
    pub(crate) fn from_magnitude(mut mag: u128, negative: bool) -> BigInt {
        let mut digits = Vec::with_capacity(u128::BITS as usize + 1);
        while mag != 0 {
            digits.push((mag % 2) as u8);
            mag /= 2;
        }
        // sign bit
        digits.push(0);
        if negative {
            BigInt::complement_increment(&mut digits);
        }
        BigInt::from_digits(digits)
    }
}

// 实现解析
impl BigInt {
    /// Parses decimal text: an optional leading `-` followed by one or more digits `0`-`9`.
    ///
    /// The magnitude is turned into bits by greedy subtraction of powers of two, all of them
    /// computed on decimal buffers since no binary form of the input exists yet.
    pub fn parse(text: &str) -> Result<BigInt> {
        let (negative, mut remaining) = decimal::parse(text)?;
        trace!("parse: {} decimal digits, negative = {}", remaining.len(), negative);

        // 2^0, 2^1, ... up to the last power not exceeding the input
        let mut powers: Vec<Vec<u8>> = Vec::new();
        let mut power = decimal::one();
        while decimal::cmp(&power, &remaining) != Ordering::Greater {
            let mut next = power.clone();
            decimal::double(&mut next);
            powers.push(power);
            power = next;
        }

        // most significant bit first
        let mut digits = Vec::with_capacity(powers.len() + 1);
        for power in powers.iter().rev() {
            if decimal::cmp(power, &remaining) != Ordering::Greater {
                decimal::sub_assign(&mut remaining, power);
                digits.push(1);
            } else {
                digits.push(0);
            }
        }
        digits.reverse();
        digits.push(0);

        if negative {
            BigInt::complement_increment(&mut digits);
        }
        Ok(BigInt::from_digits(digits))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::parse(val)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_decimal_string())
    }
}

impl BigInt {
    pub fn to_decimal_string(&self) -> String {
        let rendered = self.magnitude_decimal_string();
        if self.is_negative() {
            let mut s = String::with_capacity(rendered.len() + 1);
            s.push('-');
            s.push_str(&rendered);
            s
        } else {
            rendered
        }
    }

    /// Adds the running place value into a decimal accumulator for every set bit of the
    /// magnitude, doubling the place value after each bit.
    fn magnitude_decimal_string(&self) -> String {
        let magnitude = self.abs();
        trace!("magnitude_decimal_string: {} bits", magnitude.width());

        let mut acc = decimal::zero();
        let mut place = decimal::one();
        for bit in magnitude.digits.iter() {
            if *bit == 1 {
                decimal::add_assign(&mut acc, &place);
            }
            decimal::double(&mut place);
        }
        decimal::render(&acc)
    }
}

// 实现窄化
impl BigInt {
    /// Accumulates the digits from the top down, `None` if wider than 128 bits.
    fn to_i128(&self) -> Option<i128> {
        if self.width() > i128::BITS as usize {
            return None;
        }
        let mut acc: i128 = if self.is_negative() { -1 } else { 0 };
        for bit in self.digits.iter().rev() {
            acc = acc * 2 + *bit as i128;
        }
        Some(acc)
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() || self.magnitude_len() > u128::BITS as usize {
            return None;
        }
        let mut acc: u128 = 0;
        for bit in self.digits[..self.magnitude_len()].iter().rev() {
            acc = acc * 2 + *bit as u128;
        }
        Some(acc)
    }

    /// The low 64 bits of the two's-complement encoding, no overflow signal.
    pub fn to_u64_wrapping(&self) -> u64 {
        let mut acc: u64 = 0;
        for i in (0..u64::BITS as usize).rev() {
            acc = (acc << 1) | self.digit(i) as u64;
        }
        acc
    }

    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }
}

macro_rules! impl_big_int_to_native {
    ($($t: ty => $wide: ident),*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<Self> {
            let overflow = || BigIntError::NarrowingOverflow { target: stringify!($t) };
            let wide = val.$wide().ok_or_else(overflow)?;
            <$t>::try_from(wide).map_err(|_| overflow())
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<Self> {
            <$t>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_native!(
    i8 => to_i128, i16 => to_i128, i32 => to_i128, i64 => to_i128, isize => to_i128, i128 => to_i128,
    u8 => to_u128, u16 => to_u128, u32 => to_u128, u64 => to_u128, usize => to_u128, u128 => to_u128
);

// 实现大小比较
impl BigInt {
    /// Signs first, then widths (a wider negative value is smaller), then digits from the top.
    fn less_than(&self, other: &BigInt) -> bool {
        if self.sign != other.sign {
            return self.sign < other.sign;
        }
        if self.width() != other.width() {
            let self_key = self.width() as isize * self.sign as isize;
            let other_key = other.width() as isize * other.sign as isize;
            return self_key < other_key;
        }
        for i in (0..self.width()).rev() {
            let a = self.digits[i];
            let b = other.digits[i];
            if a != b {
                return a < b;
            }
        }
        false
    }

    /// Orders `|self|` against `|other|` for operands of the same sign.
    pub(crate) fn compare_mag(&self, other: &BigInt) -> Ordering {
        debug_assert_eq!(self.sign, other.sign);
        if self.is_negative() {
            other.cmp(self)
        } else {
            self.cmp(other)
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.less_than(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.digits, vec![0, 0, 1, 1, 0]);
    assert_eq!(big_num.sign, 1);

    let num: i16 = -100;
    let big_num: BigInt = num.into();
    assert_eq!(big_num.sign, -1);
    assert_eq!(big_num.to_string(), "-100");

    let big_num = BigInt::from(i64::MIN);
    assert_eq!(big_num.width(), 64);
    assert_eq!(big_num.to_string(), "-9223372036854775808");

    let big_num = BigInt::from(u128::MAX);
    assert_eq!(big_num.width(), 129);
    assert_eq!(big_num.to_string(), "340282366920938463463374607431768211455");
}

#[test]
fn test_canonical_form() {
    assert_eq!(BigInt::zero().digits, vec![0]);
    assert_eq!(BigInt::from(0).sign, 1);
    assert_eq!(BigInt::from(-1).digits, vec![1]);
    assert_eq!(BigInt::from(1).digits, vec![1, 0]);
    assert_eq!(BigInt::from(-2).digits, vec![0, 1]);
    assert_eq!(BigInt::from(-4).digits, vec![0, 0, 1]);
    assert_eq!(BigInt::from(3).digits, vec![1, 1, 0]);

    let padded = BigInt::from_digits(vec![1, 0, 1, 1, 1, 1]);
    assert_eq!(padded.digits, vec![1, 0, 1]);
    assert_eq!(padded, BigInt::from(-3));

    let empty = BigInt::from_digits(vec![]);
    assert_eq!(empty, BigInt::zero());

    let zeros = BigInt::from_digits(vec![0, 0, 0, 0]);
    assert_eq!(zeros.digits, vec![0]);
    assert_eq!(zeros.sign, 1);
}

#[test]
fn test_digit_sign_extension() {
    let a = BigInt::from(-6);
    assert_eq!(a.digits, vec![0, 1, 0, 1]);
    assert_eq!(a.digit(4), 1);
    assert_eq!(a.digit(100), 1);
    assert_eq!(BigInt::from(6).digit(100), 0);
}

#[test]
fn test_cache() {
    for i in -16..=16 {
        let cached = BigInt::from(i);
        assert_eq!(cached, BigInt::from_magnitude(i128::unsigned_abs(i) as u128, i < 0));
        assert_eq!(cached.to_string(), i.to_string());
    }
}

#[test]
fn test_parse() {
    assert_eq!(big("0"), BigInt::zero());
    assert_eq!(big("-0"), BigInt::zero());
    assert_eq!(big("0007"), BigInt::from(7));
    assert_eq!(big("-128"), BigInt::from(-128));
    assert_eq!(big("-128").width(), 8);
    assert_eq!(big("18446744073709551616").to_binary_string(), format!("01{}", "0".repeat(64)));

    assert!(BigInt::parse("").is_err());
    assert!(BigInt::parse("-").is_err());
    assert!(BigInt::parse("+5").is_err());
    assert_eq!(
        "12x".parse::<BigInt>(),
        Err(BigIntError::InvalidDigitSequence("12x".to_string()))
    );
    assert!(BigInt::try_from("1.5").is_err());
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);

    let s = "-98765432123456789098765432123456789";
    assert_eq!(big(s).to_string(), s);

    assert_eq!(big("-000").to_string(), "0");
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(format!("{}", BigInt::from(-1)), "-1");
}

#[test]
fn test_display_flags() {
    assert_eq!(format!("[{:>6}]", BigInt::from(42)), "[    42]");
    assert_eq!(format!("[{:<6}]", BigInt::from(-42)), "[-42   ]");
    assert_eq!(format!("[{:^7}]", BigInt::from(-42)), "[  -42  ]");
    assert_eq!(format!("[{:06}]", BigInt::from(-42)), "[-00042]");
    assert_eq!(format!("[{:+}]", BigInt::from(42)), "[+42]");
    assert_eq!(format!("[{:+}]", BigInt::zero()), "[+0]");
    assert_eq!(format!("[{:*>5}]", big("-7")), "[***-7]");
    assert_eq!(format!("{:2}", big("123456789012345678901234567890")), "123456789012345678901234567890");
    assert_eq!(BigInt::from(-42).to_decimal_string(), "-42");
}

#[test]
fn test_narrowing() {
    let a: BigInt = big("123456789110");
    assert_eq!(u64::try_from(&a), Ok(123456789110));
    assert_eq!(i64::try_from(&a), Ok(123456789110));
    assert_eq!(
        i32::try_from(&a),
        Err(BigIntError::NarrowingOverflow { target: "i32" })
    );

    assert_eq!(i64::try_from(BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i64::try_from(BigInt::from(i64::MAX)), Ok(i64::MAX));
    assert!(i64::try_from(BigInt::from(i64::MAX as i128 + 1)).is_err());
    assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(u128::try_from(BigInt::from(u128::MAX)), Ok(u128::MAX));
    assert!(u128::try_from(big("340282366920938463463374607431768211456")).is_err());
    assert_eq!(
        u8::try_from(BigInt::from(-1)),
        Err(BigIntError::NarrowingOverflow { target: "u8" })
    );
    assert_eq!(i8::try_from(BigInt::from(-128)), Ok(-128));
}

#[test]
fn test_wrapping() {
    let a = big("18446744073709551621"); // 2^64 + 5
    assert_eq!(a.to_u64_wrapping(), 5);
    assert_eq!(a.to_i64_wrapping(), 5);
    assert_eq!(BigInt::from(-3).to_u64_wrapping(), u64::MAX - 2);
    assert_eq!(BigInt::from(-3).to_i64_wrapping(), -3);
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = ["-100000000000000000000", "-129", "-128", "-2", "-1", "0", "1", "2", "127", "128", "99999999999999999999"]
        .iter()
        .map(|s| big(s))
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert!(BigInt::from(-6) < BigInt::from(-5));
    assert!(BigInt::from(-5) >= BigInt::from(-5));
    assert!(BigInt::from(5) > BigInt::from(4));
    assert!(BigInt::from(5) <= BigInt::from(6));
}
