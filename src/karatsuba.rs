//! # Karatsuba
//! Divide-and-conquer multiplication built only from [`Bigint`]'s digit
//! shifts, addition and subtraction. Each level splits both operands at half
//! the longer operand's digit count and recurses into three sub-products.
//! See: http://en.wikipedia.org/wiki/Karatsuba_algorithm

use crate::big_int::Bigint;
use crate::big_int_config::default_policy;
use crate::big_int_constants::*;
use crate::digit::Digit;

/// When [`karatsuba`] recurses and when it falls back to schoolbook multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KaratsubaPolicy {
    /// Operands with fewer digits than this are multiplied directly.
    pub threshold: usize,
    /// Maximum recursion depth. Zero always multiplies directly.
    pub max_depth: u32,
}

impl Default for KaratsubaPolicy {
    fn default() -> Self {
        KaratsubaPolicy {
            threshold: KARATSUBA_THRESHOLD,
            max_depth: KARATSUBA_DEPTH,
        }
    }
}

impl KaratsubaPolicy {
    pub fn with_depth(max_depth: u32) -> Self {
        KaratsubaPolicy { max_depth, ..KaratsubaPolicy::default() }
    }
}

/// Multiplies `a` and `b`, recursing as long as `policy` allows.
///
/// With `m` the longer operand's digit count and `k = m / 2`, the operands
/// are split as `a = x1 * R^k + x0`, `b = y1 * R^k + y0` (`R` the radix) and
///
/// `a * b = z0 + (z1 - z0 - z2) * R^k + z2 * R^(2k)`
///
/// where `z0 = x0 * y0`, `z2 = x1 * y1` and `z1 = (x1 + x0) * (y1 + y0)`.
pub fn karatsuba<D: Digit>(a: &Bigint<D>, b: &Bigint<D>, policy: KaratsubaPolicy) -> Bigint<D> {
    mul_recursive(a, b, policy.threshold, policy.max_depth)
}

/// [`karatsuba`] with the default threshold and the given depth.
pub fn karatsuba_with_depth<D: Digit>(a: &Bigint<D>, b: &Bigint<D>, depth: u32) -> Bigint<D> {
    karatsuba(a, b, KaratsubaPolicy::with_depth(depth))
}

/// [`karatsuba`] with the process-wide policy, see [`default_policy`].
pub fn karatsuba_default<D: Digit>(a: &Bigint<D>, b: &Bigint<D>) -> Bigint<D> {
    karatsuba(a, b, default_policy())
}

fn mul_recursive<D: Digit>(a: &Bigint<D>, b: &Bigint<D>, threshold: usize, depth: u32) -> Bigint<D> {
    let m = a.len().max(b.len());
    let half = m / 2;
    if depth == 0 || half == 0 || a.len() < threshold || b.len() < threshold {
        log::trace!("karatsuba base case: {} x {} digits, depth {}", a.len(), b.len(), depth);
        return a.mul_schoolbook(b);
    }
    log::trace!("karatsuba split: {} x {} digits at {}, depth {}", a.len(), b.len(), half, depth);

    let x1 = a.shift_down(half);
    let x0 = a - &x1.shift_up(half);
    let y1 = b.shift_down(half);
    let y0 = b - &y1.shift_up(half);

    let z0 = mul_recursive(&x0, &y0, threshold, depth - 1);
    let z2 = mul_recursive(&x1, &y1, threshold, depth - 1);
    let z1 = mul_recursive(&(&x1 + &x0), &(&y1 + &y0), threshold, depth - 1) - &z0 - &z2;

    z0 + z1.shift_up(half) + z2.shift_up(2 * half)
}

#[test]
fn test_policy() {
    let policy = KaratsubaPolicy::default();
    assert_eq!(policy.threshold, 10);
    assert_eq!(policy.max_depth, 0);
    assert_eq!(KaratsubaPolicy::with_depth(3), KaratsubaPolicy { threshold: 10, max_depth: 3 });
}

#[test]
fn test_mul_karatsuba() {
    let a: Bigint = Bigint::from_integer(123456789);
    let b: Bigint = Bigint::from_integer(987654321);
    assert_eq!(karatsuba_with_depth(&a, &b, 3), &a * &b);

    // narrow digits and a low threshold so the recursion actually splits
    let policy = KaratsubaPolicy { threshold: 2, max_depth: 3 };
    let a: Bigint<u8> = Bigint::from_integer(123456789);
    let b: Bigint<u8> = Bigint::from_integer(-987654321);
    assert_eq!(karatsuba(&a, &b, policy).to_i128(), Some(-123456789 * 987654321));

    let a: Bigint<u8> = Bigint::from_power(3, 200);
    let b: Bigint<u8> = Bigint::from_power(7, 150) - Bigint::from_integer(1);
    let expected = &a * &b;
    for depth in 0..6 {
        for threshold in [1, 2, 5, 10, 40] {
            let policy = KaratsubaPolicy { threshold, max_depth: depth };
            assert_eq!(karatsuba(&a, &b, policy), expected, "policy = {:?}", policy);
        }
    }
}

#[test]
fn test_mul_karatsuba_uneven() {
    let policy = KaratsubaPolicy { threshold: 1, max_depth: 8 };
    let a: Bigint<u8> = Bigint::from_power(2, 300) + Bigint::from_integer(12345);
    let b: Bigint<u8> = Bigint::from_integer(-77);
    assert_eq!(karatsuba(&a, &b, policy), &a * &b);
    let zero: Bigint<u8> = Bigint::from_integer(0);
    assert_eq!(karatsuba(&a, &zero, policy), zero);
    assert!(karatsuba(&zero, &b, policy).sign());
}

#[test]
fn test_mul_karatsuba_default() {
    let a: Bigint<u16> = Bigint::from_power(5, 90);
    let b: Bigint<u16> = Bigint::from_power(11, 70);
    assert_eq!(karatsuba_default(&a, &b), &a * &b);
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn karatsuba_agrees_with_schoolbook() {
        let digits = proptest::collection::vec(any::<u8>(), 0..40);
        proptest!(|(a in digits.clone(), b in digits, sa in any::<bool>(), sb in any::<bool>(),
                    threshold in 1usize..12, depth in 0u32..6)| {
            let x = Bigint::from_digits(a, sa);
            let y = Bigint::from_digits(b, sb);
            let policy = KaratsubaPolicy { threshold, max_depth: depth };
            let product = karatsuba(&x, &y, policy);
            prop_assert_eq!(&product, &(&x * &y));
            prop_assert!(product.len() == 1 || *product.digits().last().unwrap() != 0);
        });
    }
}
