use big_int::{BigInt, BigIntError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn multiplication_beyond_native_width() {
    let a = big("99999999999999999999");
    let b = big("99999999999999999999");
    assert_eq!((a * b).to_string(), "9999999999999999999800000000000000000001");
}

#[test]
fn truncating_division_signs() {
    assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
    assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
}

#[test]
fn not_is_negate_minus_one() {
    assert_eq!(!BigInt::from(5), BigInt::from(-6));
}

#[test]
fn increment_across_wide_boundary() {
    assert_eq!(
        big("999999999999999999999") + BigInt::from(1),
        big("1000000000000000000000")
    );
    let mut a = big("999999999999999999999");
    a.inc();
    assert_eq!(a.to_string(), "1000000000000000000000");
}

#[test]
fn factorial_of_fifty() {
    let mut acc = BigInt::one();
    for i in 1..=50 {
        acc *= BigInt::from(i);
    }
    assert_eq!(
        acc.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );

    let mut back = acc.clone();
    for i in (1..=50).rev() {
        back /= BigInt::from(i);
    }
    assert_eq!(back, BigInt::one());
}

#[test]
fn powers_of_two_minus_one() {
    let mersenne = BigInt::from(2).pow(127) - BigInt::one();
    assert_eq!(mersenne.to_string(), "170141183460469231731687303715884105727");
    assert_eq!(mersenne.bit_width(), 128);
    assert_eq!(i128::try_from(&mersenne), Ok(i128::MAX));
    assert_eq!(
        i128::try_from(&(&mersenne + &BigInt::one())),
        Err(BigIntError::NarrowingOverflow { target: "i128" })
    );
}

#[test]
fn compound_assignment_forms() {
    let mut a = BigInt::from(10);
    a += &BigInt::from(5);
    a -= BigInt::from(3);
    a *= &BigInt::from(-4);
    assert_eq!(a, BigInt::from(-48));
    a /= BigInt::from(5);
    assert_eq!(a, BigInt::from(-9));
    a %= &BigInt::from(4);
    assert_eq!(a, BigInt::from(-1));
    a <<= 70;
    a >>= 69;
    assert_eq!(a, BigInt::from(-2));
    a |= BigInt::from(1);
    a &= BigInt::from(-1);
    a ^= BigInt::from(3);
    assert_eq!(a, BigInt::from(-4));
}

#[test]
fn postfix_forms_return_old_value() {
    let mut a = BigInt::zero();
    assert_eq!(a.post_dec(), BigInt::zero());
    assert_eq!(a, BigInt::from(-1));
    assert_eq!(a.post_inc(), BigInt::from(-1));
    assert_eq!(a, BigInt::zero());
}

#[test]
fn checked_errors() {
    assert_eq!(
        BigInt::from(9).div_rem(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    );
    assert_eq!(
        "".parse::<BigInt>(),
        Err(BigIntError::InvalidDigitSequence(String::new()))
    );
    assert_eq!(
        "-12 ".parse::<BigInt>(),
        Err(BigIntError::InvalidDigitSequence("-12 ".to_string()))
    );
    assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
}

#[test]
#[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
fn remainder_by_zero_panics() {
    let _ = BigInt::from(5) % 0;
}

#[test]
fn default_and_signum() {
    assert_eq!(BigInt::default(), BigInt::zero());
    assert_eq!(BigInt::default().signum(), 0);
    assert_eq!(BigInt::from(-42).signum(), -1);
    assert_eq!(big("42").signum(), 1);
    assert_eq!(BigInt::from(-2).to_binary_string(), "10");
    assert_eq!(BigInt::from(5).to_binary_string(), "0101");
}
