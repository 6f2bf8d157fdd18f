//! Exact integer square root.
//!
//! Used only to bootstrap the share supply on the first deposit, where
//! `shares = isqrt(amount_a × amount_b) − MINIMUM_LIQUIDITY`.  The product
//! of two `u128` deposits needs up to 256 bits, so the root is taken over
//! [`U256`].
//!
//! # Algorithm
//!
//! Newton's method on integers, starting from `x₀ = ⌈n / 2⌉` (which is
//! `≥ ⌊√n⌋` for every `n ≥ 1`) and iterating `xₖ₊₁ = (xₖ + n / xₖ) / 2`.
//! While `xₖ > ⌊√n⌋` each step strictly decreases `x`, and no step ever
//! goes below `⌊√n⌋`, so the sequence terminates at the first step that
//! fails to improve and the last value is exactly `⌊√n⌋`.

use super::{narrow, widen, U256};
use crate::error::Result;

/// Returns `⌊√n⌋`.
///
/// # Examples
///
/// ```
/// use reserve_amm::math::{isqrt, U256};
///
/// assert_eq!(isqrt(U256::from(16u8)), U256::from(4u8));
/// assert_eq!(isqrt(U256::from(17u8)), U256::from(4u8));
/// assert_eq!(isqrt(U256::from(24u8)), U256::from(4u8));
/// assert_eq!(isqrt(U256::from(25u8)), U256::from(5u8));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    let two = U256::from(2u8);
    if n < two {
        return n;
    }
    // (n + 1) / 2 without the overflow at U256::MAX.
    let mut x = n / two + n % two;
    // x + n / x stays below U256::MAX: x ≤ ⌈n/2⌉ and n / x ≤ 2 on the
    // first step, and afterwards x only shrinks towards ⌊√n⌋.
    let mut y = (x + n / x) / two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

/// Returns `⌊√(a × b)⌋` as a `u128`.
///
/// The root of a product of two `u128` values is at most `max(a, b)`, so
/// the narrowing only fails on a broken invariant.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if
/// the root does not fit in `u128`.
pub fn sqrt_product(a: u128, b: u128) -> Result<u128> {
    narrow(isqrt(widen(a) * widen(b)), "square root exceeds u128")
}
