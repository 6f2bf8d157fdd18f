//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share issuance and redemption on top of the
//! swap functionality provided by [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The share supply only changes through
//! [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`].  Swaps move reserves but never
//! the supply.  For a pool with holders `h`:
//!
//! ```text
//! total_shares = Σ shares_of(h)   (the locked minimum included)
//! ```

use super::SwapPool;
use crate::domain::{Amount, HolderId, LiquidityQuote, Shares};
use crate::error::AmmError;

/// Trait for pools that issue and redeem liquidity shares.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InsufficientInitialLiquidity`]: first deposit too small
/// - [`AmmError::InsufficientShares`]: burning more than the balance
/// - [`AmmError::InvalidQuantity`]: a deposit or burn that rounds to nothing
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait LiquidityPool: SwapPool {
    /// Previews a deposit of `amount_a` and `amount_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if the first deposit
    ///   does not clear the locked minimum.
    /// - [`AmmError::Overflow`] if any intermediate arithmetic overflows.
    fn preview_add_liquidity(
        &self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityQuote, AmmError>;

    /// Deposits both assets and credits the minted shares to `holder`.
    ///
    /// # Returns
    ///
    /// The [`Shares`] credited to `holder`.
    ///
    /// # Errors
    ///
    /// - Any [`preview_add_liquidity`](Self::preview_add_liquidity) error.
    /// - [`AmmError::InvalidQuantity`] if the deposit mints no shares or
    ///   `holder` is the locked holder.
    fn add_liquidity(
        &mut self,
        holder: HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares, AmmError>;

    /// Previews burning `shares` of `holder`'s balance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the pool is empty.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the
    ///   holder's spendable balance.
    fn preview_remove_liquidity(
        &self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError>;

    /// Burns `shares` of `holder`'s balance and pays out both assets.
    ///
    /// # Errors
    ///
    /// - Any [`preview_remove_liquidity`](Self::preview_remove_liquidity)
    ///   error.
    /// - [`AmmError::InvalidQuantity`] if `shares` is zero or the payout
    ///   rounds to zero on either side.
    fn remove_liquidity(
        &mut self,
        holder: HolderId,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError>;

    /// Returns `holder`'s share balance.
    #[must_use]
    fn shares_of(&self, holder: &HolderId) -> Shares;

    /// Returns the outstanding share supply.
    #[must_use]
    fn total_shares(&self) -> Shares;
}
