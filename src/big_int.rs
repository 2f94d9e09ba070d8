//! # Bigint
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is a sequence of fixed-width [`Digit`]s, least-significant first,
//! so the radix of the positional system is `2^D::BITS`.
//! # Example
//! ```
//! use radix_bigint::Bigint;
//!
//! let a: Bigint = Bigint::from_integer(30);
//! let b: Bigint = Bigint::from_integer(400000);
//! assert_eq!(&a + &b, Bigint::from_integer(400030));
//!
//! let p: Bigint<u8> = Bigint::from_power(2, 10);
//! assert_eq!(p.to_i128(), Some(1024));
//! assert_eq!(format!("{:b}", Bigint::<u8>::from_integer(-5)), "-101");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};

use num_traits::{One, Zero};

use crate::big_int_format::{to_binary_string, OutputFormat};
use crate::digit::Digit;
use crate::error::{Error, Result};

/// Arbitrary-precision signed integer with digits of type `D`.
///
/// The digit sequence is kept canonical after every operation: it is never
/// empty, has no most-significant zero digit except for the single-digit
/// zero, and zero is always non-negative.
#[derive(Debug, Clone)]
pub struct Bigint<D: Digit = u32> {
    digits: Vec<D>,
    sign: bool,
    format: OutputFormat,
}

// 杂项辅助函数
fn strip_leading_zeros<D: Digit>(mag: &mut Vec<D>) {
    while mag.len() > 1 && mag.last().map_or(false, |d| d.is_zero()) {
        mag.pop();
    }
    if mag.is_empty() {
        mag.push(D::zero());
    }
}

fn digit_bit<D: Digit>(digit: D, bit: u32) -> bool {
    !((digit >> bit as usize) & D::one()).is_zero()
}

/// Compares two canonical magnitudes: length first, then digits from the top.
fn compare_magnitudes<D: Digit>(x: &[D], y: &[D]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        if a != b {
            return a.cmp(b);
        }
    }
    Ordering::Equal
}

fn add_magnitudes<D: Digit>(x: &[D], y: &[D]) -> Vec<D> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (i, &a) in long.iter().enumerate() {
        let b = short.get(i).copied().unwrap_or_else(D::zero);
        let (sum, carry_out) = a.add_with_carry(b, carry);
        result.push(sum);
        carry = carry_out;
    }
    if carry {
        result.push(D::one());
    }
    result
}

/// `big - little`; requires `big >= little`.
fn sub_magnitudes<D: Digit>(big: &[D], little: &[D]) -> Vec<D> {
    let mut result = Vec::with_capacity(big.len());
    let mut borrow = false;
    for (i, &a) in big.iter().enumerate() {
        let b = little.get(i).copied().unwrap_or_else(D::zero);
        let (difference, borrow_out) = a.sub_with_borrow(b, borrow);
        result.push(difference);
        borrow = borrow_out;
    }
    debug_assert!(!borrow, "subtrahend larger than minuend");
    strip_leading_zeros(&mut result);
    result
}

/// `acc += addend * RADIX^offset`, in place.
fn add_magnitude_at<D: Digit>(acc: &mut Vec<D>, addend: &[D], offset: usize) {
    if acc.len() < offset + addend.len() {
        acc.resize(offset + addend.len(), D::zero());
    }
    let mut carry = false;
    let mut i = offset;
    for &b in addend {
        let (sum, carry_out) = acc[i].add_with_carry(b, carry);
        acc[i] = sum;
        carry = carry_out;
        i += 1;
    }
    while carry {
        if i == acc.len() {
            acc.push(D::one());
            break;
        }
        let (sum, carry_out) = acc[i].add_with_carry(D::zero(), true);
        acc[i] = sum;
        carry = carry_out;
        i += 1;
    }
}

/// `digit * mag` by doubling and adding over the bits of `digit`, highest bit first.
fn mul_digit_magnitude<D: Digit>(digit: D, mag: &[D]) -> Vec<D> {
    let mut result = vec![D::zero()];
    let top_bit = D::BITS - digit.leading_zeros();
    for bit in (0..top_bit).rev() {
        result = add_magnitudes(&result, &result);
        if digit_bit(digit, bit) {
            result = add_magnitudes(&result, mag);
        }
    }
    result
}

impl<D: Digit> Bigint<D> {
    fn from_parts(digits: Vec<D>, sign: bool) -> Self {
        let mut n = Bigint { digits, sign, format: OutputFormat::default() };
        n.normalize();
        n
    }
    /// Restores canonical form: strips most-significant zero digits and makes zero non-negative.
    fn normalize(&mut self) {
        strip_leading_zeros(&mut self.digits);
        if self.is_zero() {
            self.sign = true;
        }
    }
    fn flip_sign(&mut self) {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
    }
    fn negated(&self) -> Self {
        let mut n = self.clone();
        n.flip_sign();
        n
    }
}

// 实现构造
impl<D: Digit> Bigint<D> {
    pub fn from_integer(value: i128) -> Self {
        Bigint::from_magnitude(value.unsigned_abs(), value >= 0)
    }
    fn from_magnitude(mut mag: u128, sign: bool) -> Self {
        let mut digits = Vec::with_capacity((128 / D::BITS) as usize);
        while mag > 0 {
            digits.push(D::truncate_u128(mag));
            mag >>= D::BITS;
        }
        Bigint::from_parts(digits, sign)
    }
    /// Builds a number from its digits, least-significant first. `sign` is `true` for non-negative.
    pub fn from_digits(digits: Vec<D>, sign: bool) -> Self {
        Bigint::from_parts(digits, sign)
    }
    /// `base ^ exponent`. See [`Bigint::pow`].
    pub fn from_power(base: i128, exponent: u64) -> Self {
        Bigint::from_integer(base).pow(exponent)
    }
    /// Binary exponentiation: squares of `self` are tabulated up to the
    /// highest set bit of `exponent`, then the squares whose bit is set are
    /// multiplied together.
    pub fn pow(&self, exponent: u64) -> Self {
        if exponent == 0 {
            return Bigint::one();
        }

        let exp: Bigint<D> = Bigint::from(exponent);
        let squares = self.squares_table(&exp);

        let mut result = Bigint::one();
        for (i, square) in squares.iter().enumerate() {
            if exp.bit(i) {
                result *= square;
            }
        }
        result
    }
    /// `self^(2^i)` for every bit position `i` up to the highest set bit of `exp`.
    fn squares_table(&self, exp: &Bigint<D>) -> Vec<Bigint<D>> {
        let bits = exp.bit_length();
        log::debug!("pow: {} squares", bits);

        let mut squares: Vec<Bigint<D>> = Vec::with_capacity(bits);
        if bits == 0 {
            return squares;
        }
        squares.push(self.clone());
        for i in 1..bits {
            let square = &squares[i - 1] * &squares[i - 1];
            squares.push(square);
        }
        squares
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl<D: Digit> From<$u> for Bigint<D> {
        fn from(val: $u) -> Self {
            Bigint::from_magnitude(val as u128, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl<D: Digit> From<$i> for Bigint<D> {
        fn from(val: $i) -> Self {
            Bigint::from_integer(val as i128)
        }
    }
    )*
    };
}

impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 实现访问
impl<D: Digit> Bigint<D> {
    pub fn digit(&self, index: usize) -> Result<D> {
        self.digits
            .get(index)
            .copied()
            .ok_or(Error::DigitIndexOutOfRange { index, len: self.digits.len() })
    }
    /// Number of digits. Zero has one digit.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn digits(&self) -> &[D] {
        &self.digits
    }
    /// `true` for non-negative numbers, including zero.
    pub fn sign(&self) -> bool {
        self.sign
    }
    pub fn is_negative(&self) -> bool {
        !self.sign
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0].is_zero()
    }
    /// Bit `n` of the magnitude, counting from the least-significant bit.
    pub fn bit(&self, n: usize) -> bool {
        let bits = D::BITS as usize;
        match self.digits.get(n / bits) {
            Some(digit) => digit_bit(*digit, (n % bits) as u32),
            None => false,
        }
    }
    /// Number of significant bits of the magnitude; zero for zero.
    pub fn bit_length(&self) -> usize {
        let top = self.digits[self.digits.len() - 1];
        let bits = D::BITS as usize;
        (self.digits.len() - 1) * bits + (bits - top.leading_zeros() as usize)
    }
    /// The value as an `i128`, or `None` if it does not fit.
    pub fn to_i128(&self) -> Option<i128> {
        if self.bit_length() > 128 {
            return None;
        }
        let mag = self
            .digits
            .iter()
            .rev()
            .fold(0u128, |acc, d| (acc << D::BITS) | d.widen());
        if self.sign {
            i128::try_from(mag).ok()
        } else if mag <= i128::MIN.unsigned_abs() {
            Some((mag as i128).wrapping_neg())
        } else {
            None
        }
    }
    pub fn output_format(&self) -> OutputFormat {
        self.format
    }
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.format = format;
    }
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

// 实现打印
impl<D: Digit> Bigint<D> {
    /// Renders the number in its [`OutputFormat`].
    pub fn render(&self) -> Result<String> {
        if !self.format.is_supported() {
            return Err(Error::UnsupportedFormat(self.format));
        }
        Ok(to_binary_string(!self.sign, &self.digits))
    }
}

/// Always binary, whatever the [`OutputFormat`] tag; use [`Bigint::render`] to honour the tag.
impl<D: Digit> Display for Bigint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "", &to_binary_string(false, &self.digits))
    }
}

impl<D: Digit> fmt::Binary for Bigint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "0b", &to_binary_string(false, &self.digits))
    }
}

// 实现大小比较
impl<D: Digit> PartialEq for Bigint<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<D: Digit> Eq for Bigint<D> {}

impl<D: Digit> PartialOrd for Bigint<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Ord for Bigint<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => compare_magnitudes(&self.digits, &other.digits),
            (false, false) => compare_magnitudes(&self.digits, &other.digits).reverse(),
        }
    }
}

impl<D: Digit> Hash for Bigint<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits.hash(state);
    }
}

// 实现绝对值与取反
impl<D: Digit> Bigint<D> {
    pub fn abs(&self) -> Bigint<D> {
        if self.sign {
            self.clone()
        } else {
            self.negated()
        }
    }
}

impl<D: Digit> Neg for Bigint<D> {
    type Output = Bigint<D>;

    fn neg(mut self) -> Self::Output {
        self.flip_sign();
        self
    }
}

impl<D: Digit> Neg for &Bigint<D> {
    type Output = Bigint<D>;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// 实现加法
impl<D: Digit> Bigint<D> {
    fn add_signed(&self, other: &Bigint<D>) -> Bigint<D> {
        match (self.sign, other.sign) {
            (true, true) => Bigint::from_parts(add_magnitudes(&self.digits, &other.digits), true),
            (true, false) => self.sub_signed(&other.negated()),
            (false, true) => other.sub_signed(&self.negated()),
            (false, false) => -(self.negated().add_signed(&other.negated())),
        }
    }
}

// 实现减法
impl<D: Digit> Bigint<D> {
    fn sub_signed(&self, other: &Bigint<D>) -> Bigint<D> {
        match (self.sign, other.sign) {
            (true, true) => {
                if self < other {
                    -(other.sub_signed(self))
                } else {
                    Bigint::from_parts(sub_magnitudes(&self.digits, &other.digits), true)
                }
            }
            (true, false) => self.add_signed(&other.negated()),
            (false, true) => -(other.add_signed(&self.negated())),
            (false, false) => -(self.negated().sub_signed(&other.negated())),
        }
    }
}

// 实现移位
impl<D: Digit> Bigint<D> {
    /// Multiplies by `RADIX^n` by prepending `n` zero digits.
    pub fn shift_up(&self, n: usize) -> Bigint<D> {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + n);
        digits.resize(n, D::zero());
        digits.extend_from_slice(&self.digits);
        Bigint::from_parts(digits, self.sign)
    }
    /// Divides the magnitude by `RADIX^n`, truncating, by dropping the lowest
    /// `n` digits. Shifting out every digit gives zero.
    pub fn shift_down(&self, n: usize) -> Bigint<D> {
        if n == 0 {
            return self.clone();
        }
        if n >= self.digits.len() {
            return Bigint::zero();
        }
        Bigint::from_parts(self.digits[n..].to_vec(), self.sign)
    }
}

/// `a << n` multiplies by `RADIX^n`; the shift counts digits, not bits.
impl<D: Digit> Shl<usize> for Bigint<D> {
    type Output = Bigint<D>;

    fn shl(self, n: usize) -> Self::Output {
        self.shift_up(n)
    }
}

impl<D: Digit> Shl<usize> for &Bigint<D> {
    type Output = Bigint<D>;

    fn shl(self, n: usize) -> Self::Output {
        self.shift_up(n)
    }
}

impl<D: Digit> ShlAssign<usize> for Bigint<D> {
    fn shl_assign(&mut self, n: usize) {
        *self = self.shift_up(n);
    }
}

/// `a >> n` divides the magnitude by `RADIX^n`, truncating; the shift counts digits.
impl<D: Digit> Shr<usize> for Bigint<D> {
    type Output = Bigint<D>;

    fn shr(self, n: usize) -> Self::Output {
        self.shift_down(n)
    }
}

impl<D: Digit> Shr<usize> for &Bigint<D> {
    type Output = Bigint<D>;

    fn shr(self, n: usize) -> Self::Output {
        self.shift_down(n)
    }
}

impl<D: Digit> ShrAssign<usize> for Bigint<D> {
    fn shr_assign(&mut self, n: usize) {
        *self = self.shift_down(n);
    }
}

// 实现乘法
impl<D: Digit> Bigint<D> {
    /// `digit * b`, computed by doubling and adding once per bit of `digit`.
    pub fn mul_digit(digit: D, b: &Bigint<D>) -> Bigint<D> {
        Bigint::from_parts(mul_digit_magnitude(digit, &b.digits), b.sign)
    }
    /// Long multiplication at digit granularity: digit `i` of `self` is
    /// multiplied against `other` shifted up by `i` digits.
    pub fn mul_schoolbook(&self, other: &Bigint<D>) -> Bigint<D> {
        if self.is_zero() || other.is_zero() {
            return Bigint::zero();
        }
        if self.sign != other.sign {
            return -(self.negated().mul_schoolbook(other));
        }

        let mut result = vec![D::zero()];
        for (i, &digit) in self.digits.iter().enumerate() {
            if !digit.is_zero() {
                add_magnitude_at(&mut result, &mul_digit_magnitude(digit, &other.digits), i);
            }
        }
        // Both operands share a sign here, so the product is non-negative.
        Bigint::from_parts(result, true)
    }
}

// 实现求余
impl<D: Digit> Bigint<D> {
    /// The remainder of `self` modulo `|modulus|`, in `[0, |modulus|)`.
    ///
    /// The dividend is consumed from its most-significant digit down, one
    /// bit at a time; since the residue is below the modulus before each
    /// step, a single subtraction restores that bound after it.
    pub fn checked_rem(&self, modulus: &Bigint<D>) -> Result<Bigint<D>> {
        if modulus.is_zero() {
            return Err(Error::ModuloByZero);
        }
        let m = &modulus.digits;
        if compare_magnitudes(&self.digits, m) == Ordering::Less {
            return Ok(self.euclid_adjust(self.digits.clone(), m));
        }

        let one = [D::one()];
        let mut residue = vec![D::zero()];
        for &digit in self.digits.iter().rev() {
            for bit in (0..D::BITS).rev() {
                residue = add_magnitudes(&residue, &residue);
                if digit_bit(digit, bit) {
                    residue = add_magnitudes(&residue, &one);
                }
                if compare_magnitudes(&residue, m) != Ordering::Less {
                    residue = sub_magnitudes(&residue, m);
                }
            }
        }
        Ok(self.euclid_adjust(residue, m))
    }
    fn euclid_adjust(&self, residue: Vec<D>, m: &[D]) -> Bigint<D> {
        let residue = Bigint::from_parts(residue, true);
        if self.sign || residue.is_zero() {
            residue
        } else {
            Bigint::from_parts(sub_magnitudes(m, &residue.digits), true)
        }
    }
    fn rem_or_panic(&self, modulus: &Bigint<D>) -> Bigint<D> {
        match self.checked_rem(modulus) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! impl_bin_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $inner: ident);*) => {
    $(
    impl<'a, 'b, D: Digit> $imp<&'b Bigint<D>> for &'a Bigint<D> {
        type Output = Bigint<D>;

        fn $method(self, rhs: &'b Bigint<D>) -> Self::Output {
            self.$inner(rhs)
        }
    }

    impl<'a, D: Digit> $imp<&'a Bigint<D>> for Bigint<D> {
        type Output = Bigint<D>;

        fn $method(self, rhs: &'a Bigint<D>) -> Self::Output {
            self.$inner(rhs)
        }
    }

    impl<'a, D: Digit> $imp<Bigint<D>> for &'a Bigint<D> {
        type Output = Bigint<D>;

        fn $method(self, rhs: Bigint<D>) -> Self::Output {
            self.$inner(&rhs)
        }
    }

    impl<D: Digit> $imp for Bigint<D> {
        type Output = Bigint<D>;

        fn $method(self, rhs: Self) -> Self::Output {
            self.$inner(&rhs)
        }
    }

    impl<D: Digit> $assign_imp for Bigint<D> {
        fn $assign_method(&mut self, rhs: Self) {
            *self = self.$inner(&rhs);
        }
    }

    impl<'a, D: Digit> $assign_imp<&'a Bigint<D>> for Bigint<D> {
        fn $assign_method(&mut self, rhs: &'a Bigint<D>) {
            *self = self.$inner(rhs);
        }
    }
    )*
    };
}

impl_bin_op!(
    Add, add, AddAssign, add_assign, add_signed;
    Sub, sub, SubAssign, sub_assign, sub_signed;
    Mul, mul, MulAssign, mul_assign, mul_schoolbook;
    Rem, rem, RemAssign, rem_assign, rem_or_panic
);

impl<D: Digit> Zero for Bigint<D> {
    fn zero() -> Self {
        Bigint::from_parts(vec![D::zero()], true)
    }
    fn is_zero(&self) -> bool {
        Bigint::is_zero(self)
    }
}

impl<D: Digit> One for Bigint<D> {
    fn one() -> Self {
        Bigint::from_parts(vec![D::one()], true)
    }
}

impl<D: Digit> Default for Bigint<D> {
    fn default() -> Self {
        Bigint::zero()
    }
}

#[cfg(test)]
fn big(val: i128) -> Bigint<u8> {
    Bigint::from_integer(val)
}

#[test]
fn test_from() {
    let zero = big(0);
    assert_eq!(zero.digits(), &[0]);
    assert!(zero.sign());

    let n = big(0x1_02_03);
    assert_eq!(n.digits(), &[3, 2, 1]);
    assert!(n.sign());

    let n = big(-258);
    assert_eq!(n.digits(), &[2, 1]);
    assert!(n.is_negative());

    let n: Bigint<u32> = Bigint::from(u64::MAX);
    assert_eq!(n.digits(), &[u32::MAX, u32::MAX]);

    let n: Bigint<u64> = Bigint::from_integer(i128::MIN);
    assert_eq!(n.digits(), &[0, 1 << 63]);
    assert_eq!(n.to_i128(), Some(i128::MIN));

    let n: Bigint<u16> = Bigint::from(u128::MAX);
    assert_eq!(n.len(), 8);
    assert_eq!(n.to_i128(), None);

    let n = Bigint::<u8>::from_digits(vec![7, 0, 0], false);
    assert_eq!(n.digits(), &[7]);
    let n = Bigint::<u8>::from_digits(vec![], false);
    assert!(n.is_zero());
    assert!(n.sign());
}

#[test]
fn test_round_trip() {
    for &val in &[0, 1, -1, 255, 256, -65536, 123456789, i64::MAX as i128, i128::MAX, i128::MIN] {
        let n = big(val);
        let reconstructed = n
            .digits()
            .iter()
            .rev()
            .fold(0u128, |acc, &d| acc.wrapping_mul(256).wrapping_add(d as u128));
        assert_eq!(reconstructed, val.unsigned_abs());
        assert_eq!(n.to_i128(), Some(val));
    }
}

#[test]
fn test_from_power() {
    assert_eq!(Bigint::<u32>::from_power(9, 0), Bigint::from_integer(1));
    assert_eq!(Bigint::<u32>::from_power(2, 10), Bigint::from_integer(1024));
    assert_eq!(Bigint::<u8>::from_power(0, 0), big(1));
    assert_eq!(Bigint::<u8>::from_power(0, 5), big(0));
    assert_eq!(Bigint::<u8>::from_power(-3, 3), big(-27));
    assert_eq!(Bigint::<u8>::from_power(-3, 4), big(81));
    assert_eq!(Bigint::<u8>::from_power(7, 1), big(7));
    assert_eq!(Bigint::<u16>::from_power(3, 80).to_i128(), Some(3i128.pow(80)));

    let n: Bigint<u32> = Bigint::from_power(2, 100);
    assert_eq!(n.digits(), &[0, 0, 0, 16]);
    assert_eq!(n.bit_length(), 101);

    let n: Bigint<u8> = Bigint::from_power(2, 200);
    assert_eq!(n.len(), 26);
    assert!(n.bit(200));
    assert_eq!(n.bit_length(), 201);
}

#[test]
fn test_squares_table() {
    let base = big(3);
    let squares = base.squares_table(&big(8));
    assert_eq!(squares.len(), 4);
    assert_eq!(squares[3], big(6561));
    assert_eq!(base.squares_table(&big(1)), vec![big(3)]);
    assert_eq!(base.squares_table(&big(5)).len(), 3);
    assert!(base.squares_table(&big(0)).is_empty());
}

#[test]
fn test_add_magnitude_at() {
    let mut acc = vec![0xffu8, 0xff];
    add_magnitude_at(&mut acc, &[1], 0);
    assert_eq!(acc, vec![0, 0, 1]);

    let mut acc = vec![5u8];
    add_magnitude_at(&mut acc, &[7, 1], 2);
    assert_eq!(acc, vec![5, 0, 7, 1]);

    let mut acc = vec![0u8, 0xff, 0xff, 3];
    add_magnitude_at(&mut acc, &[1], 1);
    assert_eq!(acc, vec![0, 0, 0, 4]);
}

#[test]
fn test_accessors() {
    let n = big(0x0102);
    assert_eq!(n.digit(0), Ok(2));
    assert_eq!(n.digit(1), Ok(1));
    assert_eq!(n.digit(2), Err(Error::DigitIndexOutOfRange { index: 2, len: 2 }));
    assert!(n.bit(1));
    assert!(!n.bit(0));
    assert!(n.bit(8));
    assert!(!n.bit(1000));
    assert_eq!(n.bit_length(), 9);
    assert_eq!(big(0).bit_length(), 0);
    assert_eq!(big(-5).to_i128(), Some(-5));
    assert_eq!(n.output_format(), OutputFormat::Binary);
}

#[test]
fn test_cmp() {
    let values: Vec<i128> = vec![-70000, -256, -255, -1, 0, 1, 2, 255, 256, 70000];
    for &a in &values {
        for &b in &values {
            assert_eq!(big(a).cmp(&big(b)), a.cmp(&b), "a = {}, b = {}", a, b);
            assert_eq!(big(a) == big(b), a == b);
        }
    }
    assert_eq!(-big(0), big(0));
    assert!(big(-1) < big(0));
}

#[test]
fn test_add_sub() {
    assert_eq!(big(30) + big(400000), big(400030));
    assert_eq!(Bigint::<u32>::from_integer(30) + Bigint::from_integer(400000), Bigint::from_integer(400030));
    assert_eq!(big(255) + big(1), big(256));
    assert_eq!(big(-255) + big(-1), big(-256));
    assert_eq!(big(5) + big(-7), big(-2));
    assert_eq!(big(-5) + big(7), big(2));
    assert_eq!(big(5) - big(7), big(-2));
    assert_eq!(big(-5) - big(-7), big(2));
    assert_eq!(big(-5) - big(7), big(-12));
    assert_eq!(big(5) - big(-7), big(12));

    let n = big(0x01_00_00_00) - big(1);
    assert_eq!(n.digits(), &[0xff, 0xff, 0xff]);
    let n = big(0x01_00_00_05) - big(0x01_00_00_00);
    assert_eq!(n.digits(), &[5]);
    let zero = big(-300) + big(300);
    assert_eq!(zero.digits(), &[0]);
    assert!(zero.sign());

    let mut n = big(10);
    n += big(5);
    n -= &big(20);
    assert_eq!(n, big(-5));
}

#[test]
fn test_neg_abs() {
    assert_eq!(-big(5), big(-5));
    assert_eq!(-(-big(5)), big(5));
    assert_eq!(big(-5).abs(), big(5));
    assert_eq!(big(5).abs(), big(5));
    assert!((-big(0)).sign());
}

#[test]
fn test_shift() {
    let n = big(0x0102);
    assert_eq!(n.shift_up(2).digits(), &[0, 0, 2, 1]);
    assert_eq!(&n << 1, big(0x010200));
    assert_eq!(&n >> 1, big(1));
    assert_eq!(&n >> 2, big(0));
    assert_eq!(&n >> 100, big(0));
    assert_eq!(big(-0x0102) >> 1, big(-1));
    assert_eq!(big(-0x0102) >> 2, big(0));
    assert!((big(-0x0102) >> 2).sign());
    assert_eq!(big(0).shift_up(3).digits(), &[0]);

    let mut n = big(3);
    n <<= 2;
    assert_eq!(n, big(0x030000));
    n >>= 1;
    assert_eq!(n, big(0x0300));
}

#[test]
fn test_mul() {
    assert_eq!(Bigint::mul_digit(0, &big(77)), big(0));
    assert_eq!(Bigint::mul_digit(3, &big(100)), big(300));
    assert_eq!(Bigint::mul_digit(255, &big(-255)), big(-65025));
    assert_eq!(big(12) * big(13), big(156));
    assert_eq!(big(-12) * big(13), big(-156));
    assert_eq!(big(12) * big(-13), big(-156));
    assert_eq!(big(-12) * big(-13), big(156));
    assert_eq!(big(0) * big(-13), big(0));
    assert!((big(0) * big(-13)).sign());
    assert_eq!(big(123456789) * big(987654321), big(123456789 * 987654321));

    let a: Bigint<u32> = Bigint::from(u64::MAX);
    let expected = Bigint::<u32>::from(u128::MAX) - Bigint::from(u64::MAX) - Bigint::from(u64::MAX);
    assert_eq!(&a * &a, expected);

    let mut n = big(-3);
    n *= &big(-3);
    assert_eq!(n, big(9));
}

#[test]
fn test_mod() {
    assert_eq!(big(17) % big(5), big(2));
    assert_eq!(Bigint::<u32>::from_integer(17) % Bigint::from_integer(5), Bigint::from_integer(2));
    assert_eq!(big(17) % big(-5), big(2));
    assert_eq!(big(-17) % big(5), big(3));
    assert_eq!(big(-15) % big(5), big(0));
    assert_eq!(big(3) % big(5), big(3));
    assert_eq!(big(-3) % big(5), big(2));
    assert_eq!(big(0) % big(5), big(0));
    // moduli far below the radix
    assert_eq!(big(1_000_000_007) % big(2), big(1));
    assert_eq!(Bigint::<u32>::from(u128::MAX) % Bigint::from(3u8), Bigint::from(0u8));
    assert_eq!(big(1_000_000_007) % big(1_000), big(7));
    assert_eq!(big(0x0100) % big(0x0100), big(0));
    assert_eq!(big(5).checked_rem(&big(0)), Err(Error::ModuloByZero));

    let mut n = big(100);
    n %= big(7);
    assert_eq!(n, big(2));
}

#[test]
#[should_panic(expected = "modulo by zero")]
fn test_mod_by_zero_panics() {
    let _ = big(5) % big(0);
}

#[test]
fn test_to_string() {
    assert_eq!(big(0).to_string(), "0");
    assert_eq!((-big(0)).to_string(), "0");
    assert_eq!(big(5).to_string(), "101");
    assert!(big(-5).to_string().starts_with('-'));
    assert_eq!(big(-5).to_string(), "-101");
    assert_eq!(big(0x0102).to_string(), "100000010");
    assert_eq!(format!("{:b}", Bigint::<u32>::from(1u64 << 32)), format!("1{:032b}", 0));

    assert_eq!(format!("{:#b}", big(5)), "0b101");
    assert_eq!(format!("{:#b}", big(-5)), "-0b101");
    assert_eq!(format!("{:>6b}", big(5)), "   101");
    assert_eq!(format!("{:06b}", big(-5)), "-00101");
    assert_eq!(format!("{:>5}", big(-2)), "  -10");

    let n = big(10).with_output_format(OutputFormat::Decimal);
    assert_eq!(n.render(), Err(Error::UnsupportedFormat(OutputFormat::Decimal)));
    assert_eq!(n.to_string(), "1010");
    assert_eq!(format!("{}", n.clone().with_output_format(OutputFormat::Hexadecimal)), "1010");
    assert_eq!(format!("{:b}", n), "1010");
    let mut n = n;
    n.set_output_format(OutputFormat::Binary);
    assert_eq!(n.render(), Ok("1010".to_string()));
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn is_canonical<D: Digit>(n: &Bigint<D>) -> bool {
        let top_ok = n.len() == 1 || !n.digits()[n.len() - 1].is_zero();
        let zero_ok = !n.is_zero() || n.sign();
        top_ok && zero_ok
    }

    #[test]
    fn add_sub_agree_with_i128() {
        proptest!(|(a in any::<i64>(), b in any::<i64>())| {
            let (x, y) = (Bigint::<u8>::from(a), Bigint::<u8>::from(b));
            let sum = &x + &y;
            let difference = &x - &y;
            prop_assert_eq!(sum.to_i128(), Some(a as i128 + b as i128));
            prop_assert_eq!(difference.to_i128(), Some(a as i128 - b as i128));
            prop_assert!(is_canonical(&sum));
            prop_assert!(is_canonical(&difference));
            prop_assert_eq!(&sum - &y, x.clone());
            prop_assert_eq!(&x + &(-&x), Bigint::zero());
        });
    }

    #[test]
    fn mul_agrees_with_i128() {
        proptest!(|(a in any::<i64>(), b in any::<i64>())| {
            let (x, y) = (Bigint::<u16>::from(a), Bigint::<u16>::from(b));
            let product = &x * &y;
            prop_assert_eq!(product.to_i128(), Some(a as i128 * b as i128));
            prop_assert!(is_canonical(&product));
            prop_assert_eq!(&y * &x, product.clone());
            prop_assert_eq!(&(-&x) * &(-&y), product.clone());
            prop_assert_eq!(&(-&x) * &y, -product);
        });
    }

    #[test]
    fn mul_is_associative() {
        proptest!(|(a in any::<i32>(), b in any::<i32>(), c in any::<i32>())| {
            let (x, y, z) = (Bigint::<u8>::from(a), Bigint::<u8>::from(b), Bigint::<u8>::from(c));
            prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
        });
    }

    #[test]
    fn cmp_agrees_with_i128() {
        proptest!(|(a in any::<i128>(), b in any::<i128>())| {
            let (x, y) = (Bigint::<u32>::from(a), Bigint::<u32>::from(b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x == y, a == b);
            prop_assert_eq!(-(-x.clone()), x);
        });
    }

    #[test]
    fn rem_agrees_with_rem_euclid() {
        proptest!(|(a in any::<i64>(), m in any::<i64>().prop_filter("non-zero", |m| *m != 0))| {
            let r = Bigint::<u8>::from(a) % Bigint::<u8>::from(m);
            let expected = (a as i128).rem_euclid((m as i128).abs());
            prop_assert_eq!(r.to_i128(), Some(expected));
        });
    }

    #[test]
    fn shifts_scale_by_radix() {
        proptest!(|(a in any::<i64>(), n in 0usize..6)| {
            let x = Bigint::<u8>::from(a);
            let scale = 256i128.pow(n as u32);
            prop_assert_eq!(x.shift_up(n).to_i128(), Some(a as i128 * scale));
            prop_assert_eq!(x.shift_down(n).to_i128(), Some(a as i128 / scale));
            prop_assert!(is_canonical(&x.shift_down(n)));
        });
    }

    #[test]
    fn add_sub_inverse_on_wide_values() {
        let digits = proptest::collection::vec(any::<u8>(), 0..48);
        proptest!(|(a in digits.clone(), b in digits, sa in any::<bool>(), sb in any::<bool>())| {
            let x = Bigint::from_digits(a, sa);
            let y = Bigint::from_digits(b, sb);
            prop_assert_eq!(&(&x + &y) - &y, x.clone());
            prop_assert_eq!(&(&x - &y) + &y, x);
        });
    }
}
