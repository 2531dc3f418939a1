use thiserror::Error;

/// Failures reported by the fallible `BigInt` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// Text is empty, or holds something other than an optional leading `-` followed by `0`-`9`.
    #[error("invalid digit sequence: '{0}'")]
    InvalidDigitSequence(String),

    #[error("division by zero")]
    DivisionByZero,

    /// The value does not fit in the requested native integer.
    #[error("value does not fit in {target}")]
    NarrowingOverflow { target: &'static str },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
