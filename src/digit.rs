//! # Digit
//! Fixed-width unsigned units of the positional representation used by
//! [`Bigint`](crate::Bigint). The radix of a number is `2^BITS` of its digit.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// An unsigned machine word usable as one digit of a [`Bigint`](crate::Bigint).
pub trait Digit: PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static {
    /// Width of one digit in bits.
    const BITS: u32;

    /// Returns `self + rhs + carry` wrapped to the digit width, and the outgoing carry.
    ///
    /// The two partial additions are checked for wrap-around separately:
    /// `p + q` may wrap, and independently `(p + q) + carry` may wrap.
    fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool);

    /// Returns `self - rhs - borrow` wrapped to the digit width, and the outgoing borrow.
    fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Keeps the low `BITS` bits of `value`.
    fn truncate_u128(value: u128) -> Self;

    /// Zero-extends the digit to 128 bits.
    fn widen(self) -> u128;
}

macro_rules! impl_digit {
    ($($u: ty),*) => {
    $(
    impl Digit for $u {
        const BITS: u32 = <$u>::BITS;

        #[inline]
        fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
            let (partial, wrapped_once) = self.overflowing_add(rhs);
            let (sum, wrapped_twice) = partial.overflowing_add(carry as $u);
            (sum, wrapped_once || wrapped_twice)
        }

        #[inline]
        fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
            let (partial, wrapped_once) = self.overflowing_sub(rhs);
            let (difference, wrapped_twice) = partial.overflowing_sub(borrow as $u);
            (difference, wrapped_once || wrapped_twice)
        }

        #[inline]
        fn truncate_u128(value: u128) -> Self {
            value as $u
        }

        #[inline]
        fn widen(self) -> u128 {
            self as u128
        }
    }
    )*
    };
}

impl_digit!(u8, u16, u32, u64);

#[test]
fn test_add_with_carry() {
    assert_eq!(200u8.add_with_carry(55, false), (255, false));
    assert_eq!(200u8.add_with_carry(56, false), (0, true));
    assert_eq!(200u8.add_with_carry(55, true), (0, true));
    // p + q does not wrap, only the incoming carry does
    assert_eq!(0u8.add_with_carry(u8::MAX, true), (0, true));
    assert_eq!(u8::MAX.add_with_carry(u8::MAX, true), (u8::MAX, true));
    assert_eq!(u32::MAX.add_with_carry(1, false), (0, true));
    assert_eq!(7u64.add_with_carry(8, true), (16, false));
}

#[test]
fn test_sub_with_borrow() {
    assert_eq!(5u8.sub_with_borrow(3, false), (2, false));
    assert_eq!(3u8.sub_with_borrow(5, false), (254, true));
    assert_eq!(0u8.sub_with_borrow(0, true), (u8::MAX, true));
    assert_eq!(5u16.sub_with_borrow(5, true), (u16::MAX, true));
    assert_eq!(0u32.sub_with_borrow(u32::MAX, true), (0, true));
}

#[test]
fn test_truncate() {
    assert_eq!(u8::truncate_u128(0x1ff), 0xff);
    assert_eq!(u32::truncate_u128(0x1_0000_0002), 2);
    assert_eq!(<u64 as Digit>::BITS, 64);
    assert_eq!(0xabu8.widen(), 0xab);
}
