/// Binary radix, every stored digit is `0` or `1`.
pub const RADIX: u8 = 2;

/// Base of the textual form.
pub const DECIMAL_RADIX: u8 = 10;

/// Values with magnitude up to this bound are served from the cache.
pub const MAX_CONSTANT: usize = 16;

pub const DECIMAL_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
