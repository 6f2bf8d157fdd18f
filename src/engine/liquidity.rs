//! Share issuance and redemption.
//!
//! A share is a claim on a proportional slice of both reserves.  The first
//! deposit sets the supply to `√(a·b)`, of which [`MINIMUM_LIQUIDITY`] is
//! locked forever; later deposits mint in proportion to the binding side,
//! and withdrawals redeem `⌊s · R / T⌋` of each reserve.  Every division
//! rounds toward the pool.

use super::MINIMUM_LIQUIDITY;
use crate::domain::{Amount, BasisPoints, LiquidityQuote, PoolState, Rounding, Shares, SwapDirection};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, sqrt_product, CheckedArithmetic};

/// Result of [`commit_deposit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositOutcome {
    /// The pool state after the deposit.
    pub state: PoolState,
    /// Shares to credit to the depositor.
    pub shares_issued: Shares,
    /// Shares to credit to [`HolderId::LOCKED`](crate::domain::HolderId::LOCKED);
    /// non-zero only on the first deposit.
    pub locked: Shares,
}

/// Result of [`commit_withdraw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawOutcome {
    /// The pool state after the withdrawal.
    pub state: PoolState,
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
}

/// Shares minted by the first deposit into an empty pool:
/// `⌊√(amount_a × amount_b)⌋ − MINIMUM_LIQUIDITY`.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientInitialLiquidity`] if the root does
/// not exceed [`MINIMUM_LIQUIDITY`].
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, Shares};
/// use reserve_amm::engine::preview_initial_deposit;
///
/// let shares = preview_initial_deposit(Amount::new(4_000_000), Amount::new(1_000_000));
/// assert_eq!(shares, Ok(Shares::new(1_999_000)));
/// ```
pub fn preview_initial_deposit(amount_a: Amount, amount_b: Amount) -> Result<Shares> {
    let root = Shares::new(sqrt_product(amount_a.get(), amount_b.get())?);
    match root.checked_sub(&MINIMUM_LIQUIDITY) {
        Some(shares) if !shares.is_zero() => Ok(shares),
        _ => Err(AmmError::InsufficientInitialLiquidity),
    }
}

/// Shares minted by a deposit into a funded pool.
///
/// Each side is priced independently, `⌊amount × T / R⌋`, and the smaller
/// is issued.  An off-ratio deposit is credited only for its binding side;
/// the surplus of the other asset stays in the pool.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if the pool is empty.
/// - [`AmmError::Overflow`] if a side's share count exceeds `u128`.
pub fn preview_deposit(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<Shares> {
    if total_shares.is_zero() || reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let from_a = mul_div(
        amount_a.get(),
        total_shares.get(),
        reserve_a.get(),
        Rounding::Down,
    )?;
    let from_b = mul_div(
        amount_b.get(),
        total_shares.get(),
        reserve_b.get(),
        Rounding::Down,
    )?;
    Ok(Shares::new(from_a.min(from_b)))
}

/// Previews a deposit against `state`, choosing the initial or the
/// proportional formula.
///
/// # Errors
///
/// See [`preview_initial_deposit`] and [`preview_deposit`].
pub fn preview_add_liquidity(
    state: &PoolState,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<LiquidityQuote> {
    let (shares, total_after) = issuance(state, amount_a, amount_b)?;
    let share_percent = BasisPoints::ratio(shares.get(), total_after.get())?;
    Ok(LiquidityQuote::new(amount_a, amount_b, shares, share_percent))
}

/// Counterpart deposit that keeps the current reserve ratio.
///
/// `direction` names the given side: [`SwapDirection::AToB`] takes an
/// amount of A and returns the matching amount of B.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] on an empty pool, where any
/// ratio may be chosen.
pub fn paired_amount(state: &PoolState, direction: SwapDirection, amount: Amount) -> Result<Amount> {
    let (given, other) = direction.reserves(state);
    super::quote(amount, given, other)
}

/// Applies a deposit and returns the next state with the shares to credit.
///
/// On an empty pool [`MINIMUM_LIQUIDITY`] is added to the supply on top of
/// the issued shares, reported as [`DepositOutcome::locked`].
///
/// # Errors
///
/// - Any preview error.
/// - [`AmmError::InvalidQuantity`] if the deposit mints no shares.
/// - [`AmmError::Overflow`] if a reserve or the supply exceeds `u128`.
pub fn commit_deposit(state: &PoolState, amount_a: Amount, amount_b: Amount) -> Result<DepositOutcome> {
    let (shares_issued, total_after) = issuance(state, amount_a, amount_b)?;
    if shares_issued.is_zero() {
        return Err(AmmError::InvalidQuantity("deposit too small to mint shares"));
    }
    let locked = if state.is_empty() {
        MINIMUM_LIQUIDITY
    } else {
        Shares::ZERO
    };
    let next = PoolState::new(
        state.reserve_a().safe_add(&amount_a)?,
        state.reserve_b().safe_add(&amount_b)?,
        total_after,
    )?;
    Ok(DepositOutcome {
        state: next,
        shares_issued,
        locked,
    })
}

/// Reserves redeemed by burning `shares_to_burn`: `⌊s × R / T⌋` per side.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `total_shares` is zero.
/// - [`AmmError::InsufficientShares`] if `shares_to_burn` exceeds
///   `balance` or `total_shares`.
pub fn preview_withdraw(
    shares_to_burn: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    balance: Shares,
) -> Result<(Amount, Amount)> {
    if total_shares.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let available = balance.min(total_shares);
    if shares_to_burn > available {
        return Err(AmmError::InsufficientShares {
            requested: shares_to_burn.get(),
            available: available.get(),
        });
    }
    let amount_a = reserve_a.scale(shares_to_burn.get(), total_shares.get(), Rounding::Down)?;
    let amount_b = reserve_b.scale(shares_to_burn.get(), total_shares.get(), Rounding::Down)?;
    Ok((amount_a, amount_b))
}

/// Applies a withdrawal and returns the next state with the payout.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `shares_to_burn` is zero or the
///   payout rounds to zero on either side.
/// - Any [`preview_withdraw`] error.
pub fn commit_withdraw(
    state: &PoolState,
    shares_to_burn: Shares,
    balance: Shares,
) -> Result<WithdrawOutcome> {
    if shares_to_burn.is_zero() {
        return Err(AmmError::InvalidQuantity("shares to burn must be non-zero"));
    }
    let (amount_a, amount_b) = preview_withdraw(
        shares_to_burn,
        state.reserve_a(),
        state.reserve_b(),
        state.total_shares(),
        balance,
    )?;
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InvalidQuantity(
            "withdrawal too small to redeem both reserves",
        ));
    }
    let next = PoolState::new(
        state.reserve_a().safe_sub(&amount_a)?,
        state.reserve_b().safe_sub(&amount_b)?,
        state.total_shares().safe_sub(&shares_to_burn)?,
    )?;
    Ok(WithdrawOutcome {
        state: next,
        amount_a,
        amount_b,
    })
}

/// Shares issued for a deposit and the supply after it.
fn issuance(state: &PoolState, amount_a: Amount, amount_b: Amount) -> Result<(Shares, Shares)> {
    if state.is_empty() {
        let shares = preview_initial_deposit(amount_a, amount_b)?;
        let total_after = shares.safe_add(&MINIMUM_LIQUIDITY)?;
        Ok((shares, total_after))
    } else {
        let shares = preview_deposit(
            amount_a,
            amount_b,
            state.reserve_a(),
            state.reserve_b(),
            state.total_shares(),
        )?;
        let total_after = state.total_shares().safe_add(&shares)?;
        Ok((shares, total_after))
    }
}
