//! Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as a two's-complement bit vector.
//!   Arithmetic, bitwise logic, shifts and comparisons all work on that single encoding.
//! - [`BigIntError`]: what the fallible operations (parsing, division, narrowing) report.

#[macro_use]
mod big_int;
mod arith;
mod bitwise;
mod big_num_cache;
mod big_num_constants;
mod decimal;
mod error;

pub use big_int::BigInt;
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
