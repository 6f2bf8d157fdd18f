//! Preview of a liquidity deposit.

use core::fmt;

use super::{Amount, BasisPoints, Shares};

/// What a deposit would credit, computed before it is committed so a
/// caller can preview and confirm.
///
/// `share_percent` is the depositor's slice of the supply *after* the
/// deposit, `⌊shares_issued × 10 000 / total_after⌋`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityQuote {
    deposit_a: Amount,
    deposit_b: Amount,
    shares_issued: Shares,
    share_percent: BasisPoints,
}

impl LiquidityQuote {
    /// Creates a quote.
    pub const fn new(
        deposit_a: Amount,
        deposit_b: Amount,
        shares_issued: Shares,
        share_percent: BasisPoints,
    ) -> Self {
        Self {
            deposit_a,
            deposit_b,
            shares_issued,
            share_percent,
        }
    }

    /// Returns the asset A deposit.
    #[must_use]
    pub const fn deposit_a(&self) -> Amount {
        self.deposit_a
    }

    /// Returns the asset B deposit.
    #[must_use]
    pub const fn deposit_b(&self) -> Amount {
        self.deposit_b
    }

    /// Returns the shares that would be credited to the depositor.
    #[must_use]
    pub const fn shares_issued(&self) -> Shares {
        self.shares_issued
    }

    /// Returns the depositor's share of the post-deposit supply.
    #[must_use]
    pub const fn share_percent(&self) -> BasisPoints {
        self.share_percent
    }
}

impl fmt::Display for LiquidityQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LiquidityQuote(a={}, b={}, shares={}, share={})",
            self.deposit_a, self.deposit_b, self.shares_issued, self.share_percent
        )
    }
}
