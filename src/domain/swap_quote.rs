//! Priced preview of a swap.

use core::fmt;

use super::{Amount, BasisPoints, Rounding, SwapDirection};
use crate::error::{AmmError, Result};

/// The priced outcome of a swap against one pool snapshot.
///
/// Ephemeral: recomputed from the current
/// [`PoolState`](super::PoolState) per request and never persisted.
///
/// # Invariants
///
/// - `fee_amount <= amount_in`
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, BasisPoints, SwapDirection, SwapQuote};
///
/// let q = SwapQuote::new(
///     SwapDirection::AToB,
///     Amount::new(1_000),
///     Amount::new(2_700),
///     Amount::new(3),
///     BasisPoints::new(930),
/// );
/// assert!(q.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee_amount: Amount,
    price_impact: BasisPoints,
}

impl SwapQuote {
    /// Creates a quote.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if the fee exceeds the input.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee_amount: Amount,
        price_impact: BasisPoints,
    ) -> Result<Self> {
        if fee_amount.get() > amount_in.get() {
            return Err(AmmError::InvalidQuantity("fee exceeds input amount"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee_amount,
            price_impact,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input the trader pays.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output the trader receives.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained as the 0.3% fee.
    #[must_use]
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }

    /// Returns the informational price impact.
    #[must_use]
    pub const fn price_impact(&self) -> BasisPoints {
        self.price_impact
    }

    /// Minimum output to demand at settlement for a given slippage
    /// tolerance: `⌊amount_out × (10 000 − tolerance) / 10 000⌋`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if `tolerance` exceeds 100%.
    /// - [`AmmError::Overflow`] on arithmetic overflow.
    pub fn minimum_received(&self, tolerance: BasisPoints) -> Result<Amount> {
        tolerance
            .complement()?
            .apply(self.amount_out, Rounding::Down)
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({} in={}, out={}, fee={}, impact={})",
            self.direction, self.amount_in, self.amount_out, self.fee_amount, self.price_impact
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample() -> SwapQuote {
        let Ok(q) = SwapQuote::new(
            SwapDirection::AToB,
            Amount::new(1_000),
            Amount::new(2_000),
            Amount::new(3),
            BasisPoints::new(50),
        ) else {
            panic!("valid quote");
        };
        q
    }

    #[test]
    fn accessors() {
        let q = sample();
        assert_eq!(q.direction(), SwapDirection::AToB);
        assert_eq!(q.amount_in(), Amount::new(1_000));
        assert_eq!(q.amount_out(), Amount::new(2_000));
        assert_eq!(q.fee_amount(), Amount::new(3));
        assert_eq!(q.price_impact(), BasisPoints::new(50));
    }

    #[test]
    fn fee_above_input_rejected() {
        let r = SwapQuote::new(
            SwapDirection::BToA,
            Amount::new(1),
            Amount::new(1),
            Amount::new(2),
            BasisPoints::ZERO,
        );
        let Err(AmmError::InvalidQuantity(_)) = r else {
            panic!("expected InvalidQuantity");
        };
    }

    #[test]
    fn minimum_received_one_percent() {
        assert_eq!(
            sample().minimum_received(BasisPoints::new(100)),
            Ok(Amount::new(1_980))
        );
        assert_eq!(
            sample().minimum_received(BasisPoints::ZERO),
            Ok(Amount::new(2_000))
        );
        assert_eq!(
            sample().minimum_received(BasisPoints::MAX_PERCENT),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn minimum_received_invalid_tolerance() {
        let Err(AmmError::Underflow(_)) = sample().minimum_received(BasisPoints::new(10_001))
        else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "SwapQuote(A->B in=1000, out=2000, fee=3, impact=0.50%)"
        );
    }
}
