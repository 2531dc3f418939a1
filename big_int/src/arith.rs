use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};

use log::trace;

use crate::big_num_constants::RADIX;
use crate::error::{BigIntError, Result};
use crate::BigInt;

// 实现自增自减
impl BigInt {
    /// `++x`
    pub fn inc(&mut self) -> &mut Self {
        let fill = self.fill();
        self.resize(self.width() + 1, fill);
        for d in self.digits.iter_mut() {
            if *d == 1 {
                *d = 0;
            } else {
                *d = 1;
                break;
            }
        }
        self.trim();
        self
    }

    /// `--x`
    pub fn dec(&mut self) -> &mut Self {
        let fill = self.fill();
        self.resize(self.width() + 1, fill);
        for d in self.digits.iter_mut() {
            if *d == 0 {
                *d = 1;
            } else {
                *d = 0;
                break;
            }
        }
        self.trim();
        self
    }

    /// `x++`, returns the value before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// `x--`, returns the value before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现取反
impl BigInt {
    pub(crate) fn negate(&mut self) {
        if self.is_zero() {
            return;
        }
        let fill = self.fill();
        self.resize(self.width() + 1, fill);
        BigInt::complement_increment(&mut self.digits);
        self.trim();
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    fn add_in_place(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.sign != rhs.sign {
            self.sub_in_place(&-rhs);
            return;
        }
        self.ripple_add(rhs);
    }

    /// Ripple-carry addition over the wider width plus a guard digit, `rhs` sign-extended.
    fn ripple_add(&mut self, rhs: &BigInt) {
        let width = self.width().max(rhs.width()) + 1;
        let fill = self.fill();
        self.resize(width, fill);

        let mut carry = 0;
        for i in 0..width {
            let sum = self.digits[i] + rhs.digit(i) + carry;
            self.digits[i] = sum % RADIX;
            carry = sum / RADIX;
        }
        self.trim();
    }
}

forward_binop!(Add, add, AddAssign, add_assign, add_in_place);

// 实现减法
impl BigInt {
    fn sub_in_place(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if *self == *rhs {
            *self = BigInt::zero();
            return;
        }
        if self.sign != rhs.sign {
            self.add_in_place(&-rhs);
            return;
        }

        match self.compare_mag(rhs) {
            Ordering::Less => {
                let mut result = rhs.clone();
                result.ripple_sub(self);
                result.negate();
                *self = result;
            }
            _ => self.ripple_sub(rhs),
        }
    }

    /// Ripple-borrow subtraction, `self` is the minuend.
    fn ripple_sub(&mut self, rhs: &BigInt) {
        let width = self.width().max(rhs.width()) + 1;
        let fill = self.fill();
        self.resize(width, fill);

        let mut borrow = 0;
        for i in 0..width {
            let sub = rhs.digit(i) + borrow;
            if self.digits[i] >= sub {
                self.digits[i] -= sub;
                borrow = 0;
            } else {
                self.digits[i] = self.digits[i] + RADIX - sub;
                borrow = 1;
            }
        }
        self.trim();
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign, sub_in_place);

// 实现乘法
impl BigInt {
    /// Schoolbook multiplication of the magnitudes, the sign is applied afterward.
    fn mul_in_place(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        let negative = self.sign != rhs.sign;
        let x = self.abs();
        let y = rhs.abs();
        let x_len = x.magnitude_len();
        let y_len = y.magnitude_len();

        // one spare digit for the sign bit
        let mut product = vec![0u8; x_len + y_len + 1];
        for i in 0..x_len {
            let x_digit = x.digits[i];
            if x_digit == 0 {
                continue;
            }
            let mut carry = 0;
            let mut j = 0;
            while j < y_len || carry != 0 {
                let y_digit = if j < y_len { y.digits[j] } else { 0 };
                let cur = product[i + j] + x_digit * y_digit + carry;
                product[i + j] = cur % RADIX;
                carry = cur / RADIX;
                j += 1;
            }
        }

        let mut result = BigInt::from_digits(product);
        if negative {
            result.negate();
        }
        *self = result;
    }

    /// Square-and-multiply.
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut result = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign, mul_in_place);

// 实现除法
impl BigInt {
    /// Truncating long division. The quotient is rounded toward zero and the remainder
    /// carries the sign of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        trace!("div_rem: dividend {} bits, divisor {} bits", self.width(), divisor.width());

        let mut u = self.abs();
        let mut v = divisor.abs();
        let n = v.magnitude_len();

        // normalize so that the leading divisor digit is as large as the radix allows,
        // always 1 in base 2
        let norm = RADIX / (v.digits[n - 1] + 1);
        if norm != 1 {
            u *= BigInt::from(norm);
            v *= BigInt::from(norm);
        }
        let n = v.magnitude_len();
        let v_lead = v.digits[n - 1];

        let m = u.magnitude_len();
        let mut q = vec![0u8; m + 1];
        let mut r = BigInt::zero();
        for j in (0..m).rev() {
            // r = r * base + u[j]
            r <<= 1;
            if u.digits[j] == 1 {
                r.inc();
            }

            // estimate from the two digits of r at the divisor's leading position
            let window = r.digit(n) * RADIX + r.digit(n - 1);
            let mut qhat = (window / v_lead).min(RADIX - 1);
            if qhat == 1 {
                r -= &v;
            }
            while r.is_negative() {
                r += &v;
                qhat -= 1;
            }
            q[j] = qhat;
        }

        let mut quotient = BigInt::from_digits(q);
        if self.sign != divisor.sign {
            quotient.negate();
        }
        if norm != 1 {
            r = r.div_rem_i32(norm as i32)?.0;
        }
        if self.is_negative() {
            r.negate();
        }
        Ok((quotient, r))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Single pass over the magnitude's digits for a native divisor.
    pub fn div_rem_i32(&self, divisor: i32) -> Result<(BigInt, i32)> {
        if divisor == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let v = divisor.unsigned_abs() as u64;
        let u = self.abs();
        let m = u.magnitude_len();

        let mut q = vec![0u8; m + 1];
        let mut r: u64 = 0;
        for j in (0..m).rev() {
            r = r * RADIX as u64 + u.digits[j] as u64;
            q[j] = (r / v) as u8;
            r %= v;
        }

        let mut quotient = BigInt::from_digits(q);
        if self.is_negative() != (divisor < 0) {
            quotient.negate();
        }
        // r < |divisor| <= 2^31
        let r = r as i64;
        let r = if self.is_negative() { -r } else { r };
        Ok((quotient, r as i32))
    }

    fn div_in_place(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((q, _)) => *self = q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    fn rem_in_place(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((_, r)) => *self = r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign, div_in_place);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem_in_place);

impl Div<i32> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: i32) -> Self::Output {
        match self.div_rem_i32(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Div<i32> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: i32) -> Self::Output {
        &self / rhs
    }
}

impl DivAssign<i32> for BigInt {
    fn div_assign(&mut self, rhs: i32) {
        *self = &*self / rhs;
    }
}

impl Rem<i32> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: i32) -> Self::Output {
        match self.div_rem_i32(rhs) {
            Ok((_, r)) => BigInt::from(r),
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Rem<i32> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: i32) -> Self::Output {
        &self % rhs
    }
}

impl RemAssign<i32> for BigInt {
    fn rem_assign(&mut self, rhs: i32) {
        *self = &*self % rhs;
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_inc_dec() {
    let mut a = BigInt::from(-1);
    a.inc();
    assert_eq!(a, BigInt::zero());
    assert_eq!(a.sign, 1);
    a.dec();
    assert_eq!(a, BigInt::from(-1));
    a.dec();
    assert_eq!(a, BigInt::from(-2));

    let mut b = BigInt::from(127);
    b.inc();
    assert_eq!(b, BigInt::from(128));
    let mut c = BigInt::from(-128);
    c.dec();
    assert_eq!(c, BigInt::from(-129));
    c.inc().inc();
    assert_eq!(c, BigInt::from(-127));

    let mut d = big("999999999999999999999");
    let old = d.post_inc();
    assert_eq!(old, big("999999999999999999999"));
    assert_eq!(d, big("1000000000000000000000"));
    let old = d.post_dec();
    assert_eq!(old, big("1000000000000000000000"));
    assert_eq!(d, big("999999999999999999999"));
}

#[test]
fn test_neg() {
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-BigInt::from(-128), BigInt::from(128));
    assert_eq!(-&BigInt::from(i64::MIN), BigInt::from(i64::MIN as i128 * -1));
    assert_eq!(BigInt::from(-7).abs(), BigInt::from(7));
}

#[test]
fn test_add_sub() {
    let cases: [(i64, i64); 10] = [
        (0, 0), (1, -1), (-1, -1), (127, 1), (-128, -1),
        (1000, -999), (-999, 1000), (5, 0), (0, -5), (i32::MAX as i64, i32::MAX as i64),
    ];
    for (a, b) in cases {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        assert_eq!(&x + &y, BigInt::from(a + b), "{} + {}", a, b);
        assert_eq!(&x - &y, BigInt::from(a - b), "{} - {}", a, b);
        assert_eq!(&y - &x, BigInt::from(b - a), "{} - {}", b, a);
    }

    let a = big("999999999999999999999");
    assert_eq!(a + BigInt::from(1), big("1000000000000000000000"));

    let mut a = big("-100000000000000000000000");
    a += big("99999999999999999999999");
    assert_eq!(a, BigInt::from(-1));
    a -= BigInt::from(-1);
    assert_eq!(a, BigInt::zero());
    assert_eq!(a.sign, 1);
}

#[test]
fn test_mul() {
    let a = big("99999999999999999999");
    assert_eq!((&a * &a).to_string(), "9999999999999999999800000000000000000001");
    assert_eq!(BigInt::from(-3) * BigInt::from(7), BigInt::from(-21));
    assert_eq!(BigInt::from(-3) * BigInt::from(-7), BigInt::from(21));
    assert_eq!(BigInt::from(-1) * BigInt::from(-1), BigInt::from(1));
    assert_eq!(BigInt::from(0) * BigInt::from(-7), BigInt::zero());
    assert_eq!(BigInt::from(i64::MIN) * BigInt::from(-1), -BigInt::from(i64::MIN));
}

#[test]
fn test_pow() {
    assert_eq!(BigInt::from(2).pow(100).to_string(), "1267650600228229401496703205376");
    assert_eq!(BigInt::from(-3).pow(3), BigInt::from(-27));
    assert_eq!(BigInt::from(12345).pow(0), BigInt::one());
    assert_eq!(BigInt::zero().pow(5), BigInt::zero());
}

#[test]
fn test_div() {
    let a = big("120");
    let b = big("13");
    let c = big("9");
    assert_eq!(a / b, c);

    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    let c = big("10000000000000000000000000000000");
    assert_eq!(a / b, c);

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);

    assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
    assert_eq!(BigInt::from(7) / BigInt::from(-2), BigInt::from(-3));
    assert_eq!(BigInt::from(-7) / BigInt::from(-2), BigInt::from(3));
    assert_eq!(BigInt::from(3) / BigInt::from(7), BigInt::zero());
}

#[test]
fn test_mod() {
    let a = big("12");
    let b = big("8");
    assert_eq!(a % b, big("4"));

    let a = big("10000000000000000");
    let b = big("10");
    assert_eq!(a % b, BigInt::zero());

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);

    assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
    assert_eq!(BigInt::from(7) % BigInt::from(-2), BigInt::from(1));
    assert_eq!(BigInt::from(-8) % BigInt::from(2), BigInt::zero());
}

#[test]
fn test_div_rem_zero() {
    let a = BigInt::from(42);
    assert_eq!(a.div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(a.checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(a.checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(a.div_rem_i32(0), Err(BigIntError::DivisionByZero));
    assert_eq!(
        BigInt::zero().div_rem(&BigInt::from(-3)),
        Ok((BigInt::zero(), BigInt::zero()))
    );
}

#[test]
fn test_checked_div_rem() {
    let a = big("-100000000000000000000000000001");
    let b = big("30000000000000000000");
    assert_eq!(a.checked_div(&b), Ok(big("-3333333333")));
    assert_eq!(a.checked_rem(&b), Ok(big("-10000000000000000001")));
    assert_eq!(BigInt::from(-7).checked_div(&BigInt::from(2)), Ok(BigInt::from(-3)));
    assert_eq!(BigInt::from(-7).checked_rem(&BigInt::from(2)), Ok(BigInt::from(-1)));

    // every quotient digit taking the subtract path
    let ones = BigInt::from(2).pow(90) - BigInt::one();
    assert_eq!(ones.checked_div(&BigInt::one()), Ok(ones.clone()));
    assert_eq!(ones.checked_rem(&BigInt::from(3)), Ok(BigInt::zero()));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero_panics() {
    let _ = BigInt::from(1) / BigInt::zero();
}

#[test]
fn test_div_i32() {
    let a = big("-100000000000000000000000000007");
    let (q, r) = a.div_rem_i32(10).unwrap();
    assert_eq!(q, big("-10000000000000000000000000000"));
    assert_eq!(r, -7);

    assert_eq!(BigInt::from(-7) / 2, BigInt::from(-3));
    assert_eq!(BigInt::from(-7) % 2, BigInt::from(-1));
    assert_eq!(BigInt::from(7) / -2, BigInt::from(-3));
    assert_eq!(BigInt::from(7) % -2, BigInt::from(1));
    assert_eq!(BigInt::from(i64::MAX) % i32::MIN, BigInt::from(i64::MAX % i32::MIN as i64));

    let mut b = BigInt::from(1000);
    b /= 7;
    assert_eq!(b, BigInt::from(142));
    b %= 7;
    assert_eq!(b, BigInt::from(2));
}
