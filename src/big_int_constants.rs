/// Operands shorter than this many digits are multiplied without recursion.
pub const KARATSUBA_THRESHOLD: usize = 10;

/// Default recursion budget of the Karatsuba multiplier. Zero disables recursion.
pub const KARATSUBA_DEPTH: u32 = 0;

pub const KARATSUBA_THRESHOLD_ENV: &str = "RADIX_BIGINT_KARATSUBA_THRESHOLD";

pub const KARATSUBA_DEPTH_ENV: &str = "RADIX_BIGINT_KARATSUBA_DEPTH";
