// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Modular exponentiation, `base^exp mod m`.
//!
//! All three versions reduce after every multiplication, using
//! `(x·y) mod m = ((x mod m)·(y mod m)) mod m`. Intermediates are `u128`, so
//! no product of two residues below a `u64` modulus can overflow.
//!
//! | Function | Multiplications |
//! |----------|-----------------|
//! | [`looping`] | `exp` |
//! | [`recursive`] | O(log exp) |
//! | [`repeated_squaring`] | O(log exp) |

use std::num::NonZeroU64;

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    return ((a as u128 * b as u128) % m as u128) as u64;
}

/// Multiply the running result by `base`, `exp` times.
pub fn looping(base: u64, exp: u64, modulus: NonZeroU64) -> u64 {
    let m = modulus.get();
    let base = base % m;
    let mut result = 1 % m;
    for _ in 0..exp {
        result = mul_mod(result, base, m);
    }
    return result;
}

/// Halve the exponent: `b^e = (b^(e/2))²`, times `b` when `e` is odd.
pub fn recursive(base: u64, exp: u64, modulus: NonZeroU64) -> u64 {
    let m = modulus.get();
    if m == 1 {
        return 0;
    }
    return recursive_reduced(base % m, exp, m);
}

fn recursive_reduced(base: u64, exp: u64, m: u64) -> u64 {
    if exp == 0 {
        return 1;
    }
    let half = recursive_reduced(base, exp / 2, m);
    let square = mul_mod(half, half, m);
    if exp % 2 == 1 {
        return mul_mod(square, base, m);
    }
    return square;
}

/// Walk the bits of `exp` from least significant, squaring the base at each
/// step and folding it into the result where the bit is set.
pub fn repeated_squaring(base: u64, exp: u64, modulus: NonZeroU64) -> u64 {
    let m = modulus.get();
    let mut result = 1 % m;
    let mut base = base % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    return result;
}
