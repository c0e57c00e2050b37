// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Integer multiplication on decimal digit strings.
//!
//! Splitting an `n`-digit number at `h = n / 2` gives `a = a₁·10ʰ + a₀`, so
//!
//! ```text
//! a·b = a₁b₁·10²ʰ + (a₁b₀ + a₀b₁)·10ʰ + a₀b₀
//! ```
//!
//! [`divide_conquer`] computes all four half-size products, which is still
//! Θ(n²). [`karatsuba`] gets the middle term from a single product,
//! `(a₁ + a₀)(b₁ + b₀) - a₁b₁ - a₀b₀`, for three recursive calls and
//! Θ(n^log₂3).

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Below this many digits Karatsuba falls back to schoolbook; the operand
/// sums of smaller splits are no shorter than the operands.
const KARATSUBA_CUTOFF: usize = 4;

/// A non-negative decimal integer, stored least significant digit first with
/// no leading zeros (zero is the empty digit list).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub fn zero() -> Digits {
        return Digits(Vec::new());
    }

    pub fn is_zero(&self) -> bool {
        return self.0.is_empty();
    }

    /// Number of significant digits (0 for zero).
    pub fn len(&self) -> usize {
        return self.0.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.is_zero();
    }

    fn from_le(mut digits: Vec<u8>) -> Digits {
        trim(&mut digits);
        return Digits(digits);
    }
}

impl From<u128> for Digits {
    fn from(mut value: u128) -> Digits {
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        return Digits(digits);
    }
}

impl FromStr for Digits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Digits, Error> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDigits { input: s.to_string() });
        }
        let digits = s.bytes().rev().map(|b| b - b'0').collect();
        return Ok(Digits::from_le(digits));
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for d in self.0.iter().rev() {
            write!(f, "{d}")?;
        }
        return Ok(());
    }
}

fn trim(digits: &mut Vec<u8>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0;
    for i in 0..a.len().max(b.len()) {
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    trim(&mut out);
    return out;
}

/// `a - b`, requiring `a >= b`.
fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for i in 0..a.len() {
        let mut d = a[i] as i8 - b.get(i).copied().unwrap_or(0) as i8 - borrow;
        borrow = 0;
        if d < 0 {
            d += 10;
            borrow = 1;
        }
        out.push(d as u8);
    }
    debug_assert_eq!(borrow, 0, "subtraction underflow");
    trim(&mut out);
    return out;
}

/// Multiply by `10^places`.
fn shift(a: &[u8], places: usize) -> Vec<u8> {
    if a.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; places];
    out.extend_from_slice(a);
    return out;
}

fn split(a: &[u8], half: usize) -> (Vec<u8>, Vec<u8>) {
    let (low, high) = a.split_at(half.min(a.len()));
    let (mut low, mut high) = (low.to_vec(), high.to_vec());
    trim(&mut low);
    trim(&mut high);
    return (low, high);
}

fn schoolbook_le(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x as u32 * y as u32;
        }
    }
    let mut carry = 0;
    let mut digits = Vec::with_capacity(out.len());
    for cell in out {
        let value = cell + carry;
        digits.push((value % 10) as u8);
        carry = value / 10;
    }
    debug_assert_eq!(carry, 0);
    trim(&mut digits);
    return digits;
}

/// Grade-school multiplication: every digit against every digit.
pub fn schoolbook(a: &Digits, b: &Digits) -> Digits {
    return Digits(schoolbook_le(&a.0, &b.0));
}

/// Four-product divide and conquer. Both operands are padded to a common
/// power-of-two length so every split is exact.
pub fn divide_conquer(a: &Digits, b: &Digits) -> Digits {
    if a.is_zero() || b.is_zero() {
        return Digits::zero();
    }
    let n = a.len().max(b.len()).next_power_of_two();
    let mut x = a.0.clone();
    let mut y = b.0.clone();
    x.resize(n, 0);
    y.resize(n, 0);
    return Digits::from_le(four_products(&x, &y));
}

fn four_products(a: &[u8], b: &[u8]) -> Vec<u8> {
    let n = a.len();
    if n == 1 {
        return schoolbook_le(a, b);
    }
    let half = n / 2;
    let (a0, a1) = a.split_at(half);
    let (b0, b1) = b.split_at(half);

    let high = four_products(a1, b1);
    let cross = add(&four_products(a1, b0), &four_products(a0, b1));
    let low = four_products(a0, b0);

    return add(&add(&shift(&high, 2 * half), &shift(&cross, half)), &low);
}

/// Karatsuba multiplication: three half-size products per level.
pub fn karatsuba(a: &Digits, b: &Digits) -> Digits {
    return Digits(three_products(&a.0, &b.0));
}

fn three_products(a: &[u8], b: &[u8]) -> Vec<u8> {
    let n = a.len().max(b.len());
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if n < KARATSUBA_CUTOFF {
        return schoolbook_le(a, b);
    }
    let half = n / 2;
    let (a0, a1) = split(a, half);
    let (b0, b1) = split(b, half);

    let high = three_products(&a1, &b1);
    let low = three_products(&a0, &b0);
    let both = three_products(&add(&a0, &a1), &add(&b0, &b1));
    let middle = sub(&sub(&both, &high), &low);

    return add(&add(&shift(&high, 2 * half), &shift(&middle, half)), &low);
}
