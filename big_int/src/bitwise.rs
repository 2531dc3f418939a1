use std::ops::{
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Not,
};

use crate::BigInt;

// 实现按位运算
impl BigInt {
    /// Applies `op` digit by digit over the wider width. The narrower operand is
    /// sign-extended with its own fill, so the sign of the result falls out of `op(fill, fill)`.
    fn bitwise_in_place<F>(&mut self, rhs: &BigInt, op: F)
    where
        F: Fn(u8, u8) -> u8,
    {
        let width = self.width().max(rhs.width());
        let fill = self.fill();
        self.resize(width, fill);
        for i in 0..width {
            self.digits[i] = op(self.digits[i], rhs.digit(i));
        }
        self.trim();
    }

    fn and_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a & b);
    }

    fn or_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a | b);
    }

    fn xor_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a ^ b);
    }

    /// Complements every stored digit, sign bit included, which gives `-self - 1`.
    fn not_in_place(&mut self) {
        self.digits.iter_mut().for_each(|d| *d ^= 1);
        self.trim();
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, and_in_place);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, or_in_place);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_in_place);

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.not_in_place();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

// 实现移位
impl BigInt {
    /// Zero-fills the lowest `n` positions.
    fn shl_in_place(&mut self, n: usize) {
        if self.is_zero() || n == 0 {
            return;
        }
        let high = std::mem::take(&mut self.digits);
        self.digits = std::iter::repeat(0).take(n).chain(high).collect();
    }

    /// Arithmetic shift: drops the lowest `n` digits, the sign bit stays on top.
    /// Shifting out every digit leaves `0` or `-1`.
    fn shr_in_place(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.width() {
            *self = if self.is_negative() {
                BigInt::minus_one()
            } else {
                BigInt::zero()
            };
            return;
        }
        self.digits.drain(0..n);
        self.trim();
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, n: usize) -> Self::Output {
        self.shl_in_place(n);
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        self.shl_in_place(n);
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, n: usize) -> Self::Output {
        self.shr_in_place(n);
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        self.shr_in_place(n);
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_not() {
    assert_eq!(!BigInt::from(5), BigInt::from(-6));
    assert_eq!(!BigInt::from(-6), BigInt::from(5));
    assert_eq!(!BigInt::zero(), BigInt::from(-1));
    assert_eq!(!BigInt::from(-1), BigInt::zero());
    assert_eq!(!&big("170141183460469231731687303715884105728"), big("-170141183460469231731687303715884105729"));
}

#[test]
fn test_and_or_xor() {
    let values: [i64; 9] = [0, 1, -1, 5, -6, 12, -128, 255, i64::MIN];
    for a in values {
        for b in values {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            assert_eq!(&x & &y, BigInt::from(a & b), "{} & {}", a, b);
            assert_eq!(&x | &y, BigInt::from(a | b), "{} | {}", a, b);
            assert_eq!(&x ^ &y, BigInt::from(a ^ b), "{} ^ {}", a, b);
        }
    }

    let mut a = big("-340282366920938463463374607431768211456"); // -2^128
    a |= BigInt::from(3);
    assert_eq!(a, big("-340282366920938463463374607431768211453"));
    a &= BigInt::from(-4);
    assert_eq!(a, big("-340282366920938463463374607431768211456"));
    a ^= big("-340282366920938463463374607431768211456");
    assert_eq!(a, BigInt::zero());
}

#[test]
fn test_shl() {
    assert_eq!(BigInt::from(1) << 100, BigInt::from(2).pow(100));
    assert_eq!(BigInt::from(-3) << 2, BigInt::from(-12));
    assert_eq!(BigInt::zero() << 64, BigInt::zero());
    let mut a = BigInt::from(7);
    a <<= 0;
    assert_eq!(a, BigInt::from(7));
    a <<= 3;
    assert_eq!(a, BigInt::from(56));
}

#[test]
fn test_shr() {
    assert_eq!(BigInt::from(2).pow(100) >> 99, BigInt::from(2));
    assert_eq!(BigInt::from(-7) >> 1, BigInt::from(-4));
    assert_eq!(BigInt::from(-8) >> 3, BigInt::from(-1));
    assert_eq!(BigInt::from(5) >> 3, BigInt::zero());
    assert_eq!(BigInt::from(5) >> 1000, BigInt::zero());
    assert_eq!(BigInt::from(-5) >> 1000, BigInt::from(-1));
    assert_eq!(&BigInt::from(-5) >> 0, BigInt::from(-5));

    let mut a = big("-100000000000000000000");
    a >>= 10;
    assert_eq!(a, BigInt::from(-100000000000000000000_i128 >> 10));
}
