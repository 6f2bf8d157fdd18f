//! Rounding helpers for wide integer division.
//!
//! [`div_round`] divides two [`U256`] values with an explicit
//! [`Rounding`] direction.  It is the low-level building block behind
//! [`mul_div`](super::mul_div) and therefore behind every ratio the
//! engine computes.
//!
//! # Convention
//!
//! **Always round in favour of the pool**:
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Swap output | [`Rounding::Down`] | Trader receives less |
//! | Required swap input | [`Rounding::Up`] | Trader pays more |
//! | Shares minted | [`Rounding::Down`] | Depositor credited less |
//! | Withdrawal payout | [`Rounding::Down`] | Redeemer receives less |
//!
//! # Examples
//!
//! ```
//! use reserve_amm::domain::Rounding;
//! use reserve_amm::math::{div_round, U256};
//!
//! let ten = U256::from(10u8);
//! let three = U256::from(3u8);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Down), None);
//! ```

use super::U256;
use crate::domain::Rounding;

/// Integer division of [`U256`] values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division.
/// - [`Rounding::Up`]: ceiling division, the smallest integer `>=` the
///   exact quotient.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            // ceil(n / d) = floor(n / d) + (n % d != 0); never overflows
            // because a non-zero remainder implies quotient < U256::MAX.
            if (numerator % denominator).is_zero() {
                Some(quotient)
            } else {
                Some(quotient + U256::from(1u8))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn u(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(div_round(u(1), U256::ZERO, Rounding::Down), None);
        assert_eq!(div_round(u(1), U256::ZERO, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(u(100), u(10), Rounding::Down), Some(u(10)));
        assert_eq!(div_round(u(100), u(10), Rounding::Up), Some(u(10)));
    }

    #[test]
    fn remainder_rounds_apart() {
        assert_eq!(div_round(u(7), u(2), Rounding::Down), Some(u(3)));
        assert_eq!(div_round(u(7), u(2), Rounding::Up), Some(u(4)));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(U256::ZERO, u(5), Rounding::Up), Some(U256::ZERO));
    }

    #[test]
    fn max_numerator_round_up() {
        let Some(q) = div_round(U256::MAX, u(2), Rounding::Up) else {
            panic!("expected Some");
        };
        // U256::MAX is odd, so the ceiling is MAX / 2 + 1.
        assert_eq!(q, U256::MAX / u(2) + u(1));
    }

    #[test]
    fn max_over_one_is_exact() {
        assert_eq!(div_round(U256::MAX, u(1), Rounding::Up), Some(U256::MAX));
    }
}
