//! 256-bit intermediates for `u128` amounts.
//!
//! Every product in the engine is formed in [`U256`] and narrowed back
//! to `u128` only once the final quotient is known.  Products of two
//! `u128` values always fit; products of three may not, and are checked.

use super::div_round;
use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Unsigned 256-bit integer used for all intermediate products.
pub type U256 = ruint::aliases::U256;

/// Widens a `u128` into a [`U256`].
#[inline]
#[must_use]
pub fn widen(value: u128) -> U256 {
    U256::from(value)
}

/// Narrows a [`U256`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value does not
/// fit in 128 bits.
#[inline]
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    u128::try_from(value).map_err(|_| AmmError::Overflow(context))
}

/// Checked [`U256`] multiplication.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the product exceeds
/// 256 bits.
#[inline]
pub fn checked_mul(a: U256, b: U256, context: &'static str) -> Result<U256> {
    a.checked_mul(b).ok_or(AmmError::Overflow(context))
}

/// Checked [`U256`] addition.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the sum exceeds
/// 256 bits.
#[inline]
pub fn checked_add(a: U256, b: U256, context: &'static str) -> Result<U256> {
    a.checked_add(b).ok_or(AmmError::Overflow(context))
}

/// Computes `a * b / denominator` with explicit rounding and no
/// intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::Rounding;
/// use reserve_amm::math::mul_div;
///
/// // u128::MAX * 3 overflows u128 but the quotient fits.
/// let q = mul_div(u128::MAX, 3, 4, Rounding::Down);
/// assert_eq!(q, Ok(u128::MAX / 4 * 3 + 2));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    let product = widen(a) * widen(b);
    let quotient =
        div_round(product, widen(denominator), rounding).ok_or(AmmError::DivisionByZero)?;
    narrow(quotient, "mul_div quotient exceeds u128")
}
