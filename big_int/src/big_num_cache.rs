use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// `0, 1, ..., MAX_CONSTANT`
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_magnitude(val as u128, false))
        .collect();
    /// `0, -1, ..., -MAX_CONSTANT`
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_magnitude(val as u128, true))
        .collect();
}
