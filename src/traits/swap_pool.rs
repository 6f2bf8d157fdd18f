//! Core swap trait for pricing and settling swaps.
//!
//! [`SwapPool`] covers the full lifecycle of a swap:
//!
//! 1. **Preview**: [`SwapPool::quote_swap`] prices a swap against the
//!    current reserves without touching them.
//! 2. **Execute**: [`SwapPool::swap`] settles it, subject to a minimum
//!    acceptable output.
//! 3. **Inspect**: [`SwapPool::spot_price`] and [`SwapPool::state`].
//!
//! # Fee Deduction Invariant
//!
//! The 0.3% fee is taken from the input before it reaches the curve and
//! stays in the input reserve:
//!
//! ```text
//! in_with_fee = amount_in × 997
//! amount_out  = ⌊in_with_fee × r_out / (r_in × 1000 + in_with_fee)⌋
//! ```
//!
//! so `reserve_a × reserve_b` strictly grows with every settled swap.

use crate::domain::{Amount, PoolState, SwapDirection, SwapQuote, SwapSpec};
use crate::error::AmmError;

/// Core trait for a two-asset swap pool.
///
/// Previews take `&self` and may run concurrently; [`swap`](Self::swap)
/// takes `&mut self`, so at most one mutation is in flight per pool.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InvalidReserves`]: the pool has not been funded
/// - [`AmmError::OutputExceedsReserve`]: an exact-output request the
///   pool can never satisfy
/// - [`AmmError::SlippageExceeded`]: the output fell below the minimum
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait SwapPool {
    /// Prices a swap against the current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidReserves`] if either reserve is zero.
    /// - [`AmmError::OutputExceedsReserve`] for an exact-output request
    ///   of the whole output reserve or more.
    /// - [`AmmError::Overflow`] if any intermediate arithmetic overflows.
    fn quote_swap(&self, direction: SwapDirection, spec: SwapSpec) -> Result<SwapQuote, AmmError>;

    /// Settles a swap and returns the quote it settled at.
    ///
    /// The input reserve grows by the full input, the output reserve
    /// shrinks by the output, and both update together or not at all.
    ///
    /// # Errors
    ///
    /// - Any [`quote_swap`](Self::quote_swap) error.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::InvalidQuantity`] if the output rounds to zero.
    fn swap(
        &mut self,
        direction: SwapDirection,
        spec: SwapSpec,
        min_amount_out: Amount,
    ) -> Result<SwapQuote, AmmError>;

    /// Returns the fee-free price of one whole unit of the input asset,
    /// in smallest units of the output asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the pool is empty.
    fn spot_price(&self, direction: SwapDirection) -> Result<Amount, AmmError>;

    /// Returns a snapshot of the reserves and share supply.
    #[must_use]
    fn state(&self) -> PoolState;
}
