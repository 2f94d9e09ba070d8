//! Radix Bigint \
//! This crate provides:
//! - [`Bigint`]: Arbitrary-precision signed integers in sign-magnitude form, generic over the
//!   digit width (`u8`, `u16`, `u32` or `u64` digits; `u32` by default).
//! - [`karatsuba()`]: Recursive divide-and-conquer multiplication with a configurable
//!   [`KaratsubaPolicy`].
//!
//! Numbers render in binary digit groups only; decimal and hexadecimal output are reserved
//! and report [`Error::UnsupportedFormat`].

mod big_int;
mod big_int_config;
mod big_int_constants;
mod big_int_format;
mod digit;
mod error;
mod karatsuba;

pub use big_int::Bigint;
pub use big_int_config::default_policy;
pub use big_int_constants::{KARATSUBA_DEPTH, KARATSUBA_THRESHOLD};
pub use big_int_format::OutputFormat;
pub use digit::Digit;
pub use error::{Error, Result};
pub use karatsuba::{karatsuba, karatsuba_default, karatsuba_with_depth, KaratsubaPolicy};
pub use num_traits::{One, Zero};

#[cfg(test)]
mod tests {
    use crate::{karatsuba_with_depth, Bigint};

    #[test]
    fn it_works() {
        let a: Bigint = Bigint::from_power(9, 40);
        let b: Bigint = Bigint::from_integer(-900000000000);
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a % b = {}", &a % &b);
        println!("a << 2 = {}", &a << 2);
        println!("a >> 2 = {}", &a >> 2);
        assert_eq!(karatsuba_with_depth(&a, &b, 2), &a * &b);
    }

    #[test]
    fn scenarios() {
        type Big = Bigint<u32>;
        assert_eq!(Big::from_integer(30) + Big::from_integer(400000), Big::from_integer(400030));
        assert_eq!(Big::from_power(9, 0), Big::from_integer(1));
        assert_eq!(Big::from_power(2, 10), Big::from_integer(1024));
        assert_eq!(Big::from_integer(17) % Big::from_integer(5), Big::from_integer(2));
        assert_eq!(Big::from_integer(0).to_string(), "0");
        assert!(Big::from_integer(-5).to_string().starts_with('-'));
        let (a, b) = (Big::from_integer(123456789), Big::from_integer(987654321));
        assert_eq!(karatsuba_with_depth(&a, &b, 3), &a * &b);
    }
}
