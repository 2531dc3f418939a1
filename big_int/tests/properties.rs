//! Property-based tests for `BigInt`.
//!
//! Narrow operands are checked against `i128` arithmetic. Wide operands, built
//! from random decimal strings, are checked against the algebraic identities
//! the type must satisfy.

use big_int::{BigInt, BigIntError};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Random decimal text of up to 60 digits, with an optional sign and leading zeros.
fn decimal_text() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{1,60}").prop_map(|(negative, digits)| {
        if negative {
            format!("-{digits}")
        } else {
            digits
        }
    })
}

/// What the text should render back as: no leading zeros, no `-0`.
fn canonical_form(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

fn wide() -> impl Strategy<Value = BigInt> {
    decimal_text().prop_map(|s| s.parse::<BigInt>().unwrap())
}

fn narrow() -> impl Strategy<Value = i64> {
    prop_oneof![
        -300i64..300,
        any::<i64>(),
        Just(i64::MIN),
        Just(i64::MAX),
    ]
}

fn big(n: impl Into<BigInt>) -> BigInt {
    n.into()
}

// ============================================================================
// Conversions
// ============================================================================

proptest! {
    #[test]
    fn decimal_round_trip(text in decimal_text()) {
        let value: BigInt = text.parse().unwrap();
        prop_assert_eq!(value.to_string(), canonical_form(&text));
    }

    #[test]
    fn native_round_trip(n in any::<i128>()) {
        let value = BigInt::from(n);
        prop_assert_eq!(i128::try_from(&value), Ok(n));
        prop_assert_eq!(value.to_string(), n.to_string());
        prop_assert_eq!(value.to_i64_wrapping(), n as i64);
    }

    #[test]
    fn parse_agrees_with_native(n in any::<i128>()) {
        prop_assert_eq!(n.to_string().parse::<BigInt>().unwrap(), BigInt::from(n));
    }

    #[test]
    fn narrowing_reports_overflow(n in any::<i64>()) {
        let value = BigInt::from(n);
        match i32::try_from(n) {
            Ok(expected) => prop_assert_eq!(i32::try_from(&value), Ok(expected)),
            Err(_) => prop_assert_eq!(
                i32::try_from(&value),
                Err(BigIntError::NarrowingOverflow { target: "i32" })
            ),
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

proptest! {
    #[test]
    fn arithmetic_matches_i128(a in narrow(), b in narrow()) {
        let (x, y) = (big(a), big(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, big(a + b));
        prop_assert_eq!(&x - &y, big(a - b));
        prop_assert_eq!(&x * &y, big(a * b));
        if b != 0 {
            prop_assert_eq!(&x / &y, big(a / b));
            prop_assert_eq!(&x % &y, big(a % b));
        }
    }

    #[test]
    fn inc_dec_match_i128(a in narrow()) {
        let mut x = big(a);
        x.inc();
        prop_assert_eq!(&x, &big(a as i128 + 1));
        x.dec();
        x.dec();
        prop_assert_eq!(&x, &big(a as i128 - 1));
    }

    #[test]
    fn add_then_sub(a in wide(), b in wide()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn mul_commutes(a in wide(), b in wide()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn self_sub_is_zero(a in wide()) {
        let zero = &a - &a;
        prop_assert!(zero.is_zero());
        prop_assert_eq!(zero, BigInt::zero());
    }

    #[test]
    fn division_identity(a in wide(), b in wide()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn small_divisor_agrees(a in wide(), d in any::<i32>()) {
        prop_assume!(d != 0);
        let (q, r) = a.div_rem_i32(d).unwrap();
        let (big_q, big_r) = a.div_rem(&big(d)).unwrap();
        prop_assert_eq!(q, big_q);
        prop_assert_eq!(big(r), big_r);
    }
}

// ============================================================================
// Bitwise
// ============================================================================

proptest! {
    #[test]
    fn bitwise_matches_i128(a in narrow(), b in narrow(), k in 0usize..80) {
        let (x, y) = (big(a), big(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x & &y, big(a & b));
        prop_assert_eq!(&x | &y, big(a | b));
        prop_assert_eq!(&x ^ &y, big(a ^ b));
        prop_assert_eq!(!&x, big(!a));
        prop_assert_eq!(&x >> k, big(a >> k));
        prop_assert_eq!(&x << (k / 2), big(a << (k / 2)));
    }

    #[test]
    fn twos_complement_identities(a in wide()) {
        prop_assert_eq!(!&a, -&a - BigInt::one());
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert_eq!(&a ^ &a, BigInt::zero());
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn shift_round_trip(a in wide(), k in 0usize..200) {
        let a = a.abs();
        prop_assert_eq!(&(&a << k) >> k, a.clone());
        prop_assert_eq!(&a << 0, a.clone());
        prop_assert_eq!(&a >> 0, a.clone());
        prop_assert_eq!(&a << k, &a * &BigInt::from(2).pow(k as u32));
    }
}

// ============================================================================
// Ordering
// ============================================================================

proptest! {
    #[test]
    fn ordering_is_total(a in wide(), b in wide()) {
        let held = [a < b, a == b, a > b].iter().filter(|x| **x).count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
    }

    #[test]
    fn ordering_matches_i128(a in narrow(), b in narrow()) {
        prop_assert_eq!(big(a).cmp(&big(b)), a.cmp(&b));
    }

    #[test]
    fn ordering_matches_subtraction(a in wide(), b in wide()) {
        let diff = &a - &b;
        prop_assert_eq!(a.cmp(&b), diff.cmp(&BigInt::zero()));
    }
}
